//! Core constants for camera limits and spyglass defaults.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Lowest zoom level a viewport accepts.
pub const MIN_ZOOM: f64 = 0.0;

/// Highest zoom level a viewport accepts.
pub const MAX_ZOOM: f64 = 24.0;

/// Steepest camera tilt in degrees.
pub const MAX_PITCH: f64 = 85.0;

/// Web Mercator latitude limit.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Default spyglass border color (dark grey).
pub const DEFAULT_BORDER_COLOR: &str = "#555555";

/// Default spyglass border width in pixels.
pub const DEFAULT_BORDER_WIDTH: f64 = 5.0;

/// Default opacity of the spyglass render surface.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Default width/height of the spyglass in pixels.
pub const DEFAULT_SIZE: f64 = 350.0;

/// Smallest spyglass width/height in pixels.
pub const MIN_SIZE: f64 = 1.0;
