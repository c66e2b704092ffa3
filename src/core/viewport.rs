use crate::core::{
    constants::{MAX_PITCH, MAX_ZOOM, MIN_ZOOM},
    geo::{LatLng, Point},
};
use serde::{Deserialize, Serialize};

/// A viewport's pose: center coordinate, zoom level, bearing and pitch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// Rotation in degrees, clockwise from north
    pub bearing: f64,
    /// Tilt in degrees away from straight down
    pub pitch: f64,
}

impl Camera {
    pub fn new(center: LatLng, zoom: f64, bearing: f64, pitch: f64) -> Self {
        Self {
            center,
            zoom,
            bearing,
            pitch,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(LatLng::default(), 0.0, 0.0, 0.0)
    }
}

/// How a camera change is carried out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Instantaneous change, no interpolation
    Jump,
    /// Eased change over the given duration
    Ease { duration_ms: u64 },
}

/// A camera write request handed to a map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraOptions {
    pub camera: Camera,
    pub transition: TransitionKind,
}

impl CameraOptions {
    /// Request a discontinuous change to `camera`
    pub fn jump(camera: Camera) -> Self {
        Self {
            camera,
            transition: TransitionKind::Jump,
        }
    }
}

/// Manages the current view of a map: camera pose and screen dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// Rotation in degrees, normalized into (-180, 180]
    pub bearing: f64,
    /// Tilt in degrees
    pub pitch: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// Always <= `max_zoom`; only changed through `set_zoom_limits`
    min_zoom: f64,
    max_zoom: f64,
}

impl Viewport {
    /// Creates a new north-up, untilted viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center: center.normalized(),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            bearing: 0.0,
            pitch: 0.0,
            size,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Sets the center, clamping latitude and wrapping longitude
    pub fn set_center(&mut self, center: LatLng) {
        self.center = center.normalized();
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the bearing, normalized into (-180, 180]
    pub fn set_bearing(&mut self, bearing: f64) {
        let wrapped = bearing % 360.0;
        self.bearing = if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped <= -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        };
    }

    /// Sets the pitch, clamped to [0, MAX_PITCH]
    pub fn set_pitch(&mut self, pitch: f64) {
        self.pitch = pitch.clamp(0.0, MAX_PITCH);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// The minimum allowed zoom level
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// The maximum allowed zoom level
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the zoom limits and re-clamps the current zoom.
    ///
    /// An inverted pair is swapped. A NaN bound falls back to the default
    /// limit on that side.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let min_zoom = if min_zoom.is_nan() { MIN_ZOOM } else { min_zoom };
        let max_zoom = if max_zoom.is_nan() { MAX_ZOOM } else { max_zoom };
        let (min_zoom, max_zoom) = if min_zoom > max_zoom {
            log::warn!("inverted zoom limits {} > {}, swapping", min_zoom, max_zoom);
            (max_zoom, min_zoom)
        } else {
            (min_zoom, max_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Current camera pose
    pub fn camera(&self) -> Camera {
        Camera::new(self.center, self.zoom, self.bearing, self.pitch)
    }

    /// Applies a camera pose. Returns true when the pose actually changed.
    pub fn apply_camera(&mut self, camera: &Camera) -> bool {
        let before = self.camera();
        self.set_center(camera.center);
        self.set_zoom(camera.zoom);
        self.set_bearing(camera.bearing);
        self.set_pitch(camera.pitch);
        self.camera() != before
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::default(), 0.0, Point::new(800.0, 600.0))
    }
}
