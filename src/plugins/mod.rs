pub mod spyglass;
