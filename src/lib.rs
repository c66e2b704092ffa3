//! # Spyglass
//!
//! A camera-synchronized "spyglass" overlay for map views.
//!
//! A small secondary map (the spyglass) sits on top of a primary map and
//! shows an alternate data layer over the same geography. This crate keeps
//! any number of map views locked to one camera pose (center, zoom, bearing,
//! pitch) without feedback loops, and styles the overlay chrome (shape,
//! border, opacity, size).
//!
//! Host rendering engines plug in through the [`MapView`] and
//! [`ElementHandle`] traits. A headless [`Map`] implementation is included.

pub mod core;
pub mod input;
pub mod plugins;
pub mod prelude;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{SpyglassOptions, SpyglassOptionsPatch, SpyglassShape},
    geo::{LatLng, Point},
    map::Map,
    sync::CameraSync,
    viewport::{Camera, CameraOptions, TransitionKind, Viewport},
};

pub use input::{EventListener, EventManager, MapEvent, MapEventType};

pub use plugins::spyglass::{SpyglassControl, SpyglassControlBuilder};

pub use traits::{ElementHandle, MapView};

pub use ui::{ChromeKind, Element, ElementStyle, Length, StyleProperty};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Camera error: {0}")]
    Camera(String),

    #[error("Element missing: {0}")]
    ElementMissing(String),

    #[error("Invalid view: {0}")]
    InvalidView(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;
