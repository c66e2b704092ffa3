//! Shared trait abstractions for the host boundary
//!
//! A rendering engine plugs into the spyglass by implementing [`MapView`]
//! for its map handle and [`ElementHandle`] for its styleable elements.
//! Methods take `&self`; hosts keep their own interior mutability so a
//! listener running inside `set_camera` can call back into `on`/`off`.

use crate::{
    core::viewport::{Camera, CameraOptions},
    input::{EventListener, MapEventType},
    ui::{
        elements::ChromeKind,
        style::{ElementStyle, StyleProperty},
    },
    Result,
};
use std::sync::Arc;

/// Trait for styleable elements (overlay container, render surface, chrome)
pub trait ElementHandle: Send + Sync {
    /// Write one style property
    fn apply_style(&self, property: StyleProperty);

    /// Snapshot of the current style
    fn style(&self) -> ElementStyle;
}

/// Trait for a map rendering surface the synchronizer can drive
pub trait MapView: Send + Sync {
    /// Current camera pose
    fn camera(&self) -> Result<Camera>;

    /// Move the camera. Implementations emit a move event when the pose changes.
    fn set_camera(&self, options: CameraOptions) -> Result<()>;

    /// Resize the rendering surface to `width` x `height` pixels
    fn resize(&self, width: f64, height: f64) -> Result<()>;

    /// Outer container element of the view
    fn container(&self) -> Result<Arc<dyn ElementHandle>>;

    /// Element holding the rendered canvas
    fn render_surface(&self) -> Result<Arc<dyn ElementHandle>>;

    /// Built-in chrome element, if the host draws one
    fn chrome(&self, kind: ChromeKind) -> Option<Arc<dyn ElementHandle>>;

    /// Subscribe a listener.
    ///
    /// Listener errors surface through whatever raised the event
    /// (`set_camera`, `resize`, the host's ready signal). A `Ready` listener
    /// added after the view is already ready may be run on the spot; there is
    /// no caller to return its error to, so hosts log it and drop it.
    fn on(&self, event_type: MapEventType, listener: EventListener);

    /// Unsubscribe exactly the listener previously passed to `on`
    fn off(&self, event_type: MapEventType, listener: &EventListener);
}
