//! Pixel to geographic coordinate transform.
//!
//! The source map is a fixed raster; the affine constants below were surveyed
//! against it once and are not configurable.

use serde::{Deserialize, Serialize};

pub const LAT0: f64 = 57.64451092;
pub const LAT_SCALE: f64 = 0.000245657;
pub const LON0: f64 = 22.9375029;
pub const LON_SCALE: f64 = 0.000388979;

/// WGS84 position derived from a pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Convert a pixel position to latitude/longitude.
///
/// Latitude follows the X pixel axis and longitude the Y pixel axis. That is
/// the source map's axis convention, not a mix-up. No bounds checking: pixels
/// outside the authored map produce nonsensical but valid coordinates.
pub fn to_geographic(pixel_x: f64, pixel_y: f64) -> GeoPoint {
    GeoPoint {
        latitude: LAT0 - pixel_x * LAT_SCALE,
        longitude: LON0 + pixel_y * LON_SCALE,
    }
}
