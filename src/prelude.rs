//! Prelude module for common spyglass types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use spyglass::prelude::*;`

pub use crate::core::{
    config::{SpyglassOptions, SpyglassOptionsPatch, SpyglassShape},
    geo::{LatLng, Point},
    map::Map,
    sync::CameraSync,
    viewport::{Camera, CameraOptions, TransitionKind, Viewport},
};

pub use crate::input::{EventListener, EventManager, MapEvent, MapEventType};

pub use crate::plugins::spyglass::{SpyglassControl, SpyglassControlBuilder};

pub use crate::traits::{ElementHandle, MapView};

pub use crate::ui::{
    elements::{ChromeKind, Element},
    style::{BorderStyle, Display, ElementStyle, Length, Positioning, StyleProperty},
};

pub use crate::{Error as MapError, Result};

pub use std::sync::{Arc, Weak};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
