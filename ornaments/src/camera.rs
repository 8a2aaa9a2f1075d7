//! Camera state as delivered by the map engine, and the ground-resolution
//! conversion which feeds the scale bar.

use crate::position::Position;

/// Snapshot of the map camera. All fields are optional; an absent field leaves the
/// corresponding ornament untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraUpdate {
    /// Geographical position at the center of the viewport.
    pub center: Option<Position>,

    /// Zoom level, where 0 means the whole world fits in a single tile.
    pub zoom: Option<f64>,

    /// Rotation of the map in degrees, clockwise from north.
    pub bearing: Option<f64>,
}

/// Conversion from camera state to ground resolution. Map engines with projections other
/// than Web Mercator can plug their own in with
/// [`Ornaments::with_meters_per_pixel`](crate::Ornaments::with_meters_per_pixel).
pub type MetersPerPixel = fn(latitude: f64, zoom: f64) -> f64;

const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;

/// Size of a single tile in pixels, as used by most tile sources.
const TILE_SIZE: u32 = 256;

/// Ground distance covered by a single screen pixel at the given latitude and zoom level,
/// assuming the Web Mercator projection.
/// <https://wiki.openstreetmap.org/wiki/Zoom_levels>
pub fn meters_per_pixel(latitude: f64, zoom: f64) -> f64 {
    // Number of pixels for the width of the world at this zoom level.
    let total_pixels = 2f64.powf(zoom) * (TILE_SIZE as f64);

    EARTH_CIRCUMFERENCE * latitude.to_radians().cos() / total_pixels
}
