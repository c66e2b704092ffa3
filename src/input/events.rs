use crate::core::{geo::Point, viewport::Camera};
use std::fmt;

/// Map event types that can be emitted by a map view
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Camera changed, whatever the cause (user drag, programmatic set)
    Move { camera: Camera },
    /// First successful render finished. Fires once.
    Ready,
    /// Rendering surface was resized
    Resize { size: Point },
}

/// Event names listeners subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapEventType {
    Move,
    Ready,
    Resize,
}

impl MapEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapEventType::Move => "move",
            MapEventType::Ready => "ready",
            MapEventType::Resize => "resize",
        }
    }
}

impl fmt::Display for MapEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MapEvent {
    /// Gets the type this event is dispatched under
    pub fn event_type(&self) -> MapEventType {
        match self {
            MapEvent::Move { .. } => MapEventType::Move,
            MapEvent::Ready => MapEventType::Ready,
            MapEvent::Resize { .. } => MapEventType::Resize,
        }
    }

    /// Gets the camera carried by this event, if any
    pub fn camera(&self) -> Option<Camera> {
        match self {
            MapEvent::Move { camera } => Some(*camera),
            _ => None,
        }
    }
}
