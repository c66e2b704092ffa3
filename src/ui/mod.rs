pub mod elements;
pub mod style;

pub use elements::{ChromeKind, Element};

pub use style::{BorderStyle, Display, ElementStyle, Length, Positioning, StyleProperty};
