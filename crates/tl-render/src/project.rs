//! Geographic-to-pixel projection and axis ticks.
//!
//! The map image covers exactly the [`GeoBounds`] supplied by the caller:
//! longitude interpolates linearly onto `[0, width]` and latitude onto
//! `[height, 0]`.  The latitude axis is inverted because image row 0 is the
//! top of the picture while latitudes grow northward.
//!
//! Points outside the bounds project to pixels outside the canvas.  That is
//! deliberate: the projection never clips and never fails, and the
//! rasteriser drops off-canvas pixels individually.

use tl_core::{GeoBounds, GeoPoint};

/// Project `point` onto the pixel grid of a `(width, height)` image covering
/// `bounds`.
///
/// The exact top-left bound maps to `(0, 0)`; the exact bottom-right bound
/// maps to `(width, height)`.  Coordinates are truncated toward zero, the
/// way the classic raster recipe does it, so adjacent fixes land on stable
/// pixels.
pub fn to_pixel(bounds: &GeoBounds, (width, height): (u32, u32), point: GeoPoint) -> (i64, i64) {
    let x = (point.lon - bounds.lon_left) * f64::from(width) / bounds.lon_span();

    // Interpolate latitude upward from the bottom edge, then flip.
    let y_up = (point.lat - bounds.lat_bottom) * f64::from(height) / bounds.lat_span();
    let y = i64::from(height) - y_up as i64;

    (x as i64, y)
}

/// Evenly spaced axis labels for a map covering `bounds`.
///
/// Returns `(lon_ticks, lat_ticks)`: `n_lon` longitudes in ascending order
/// and `n_lat` latitudes sorted descending (row 0 of the image is the
/// northernmost), each rounded to four decimals.
pub fn axis_ticks(bounds: &GeoBounds, n_lon: usize, n_lat: usize) -> (Vec<f64>, Vec<f64>) {
    let lon_ticks = linspace(bounds.lon_left, bounds.lon_right, n_lon);
    let mut lat_ticks = linspace(bounds.lat_bottom, bounds.lat_top, n_lat);
    lat_ticks.reverse();
    (lon_ticks, lat_ticks)
}

/// `n` evenly spaced values from `start` to `end` inclusive, rounded to four
/// decimal places.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![round4(start)],
        _ => (0..n)
            .map(|i| round4(start + (end - start) * i as f64 / (n - 1) as f64))
            .collect(),
    }
}

#[inline]
fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
