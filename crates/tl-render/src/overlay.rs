//! Track and route overlays on a static map image.
//!
//! Drawing never mutates the input image: every entry point clones the map
//! and returns the annotated copy, so one loaded map can serve any number
//! of overlays.

use std::path::Path;

use image::{Rgba, RgbaImage};

use tl_core::{GeoBounds, GeoPoint};
use tl_spatial::{RoadNetwork, Route};

use crate::RenderResult;
use crate::project::to_pixel;
use crate::raster::draw_segment;

// ── TrackStyle ────────────────────────────────────────────────────────────────

/// Colour and stroke width of a drawn track.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrackStyle {
    pub color: Rgba<u8>,
    pub width: u32,
}

impl Default for TrackStyle {
    /// Opaque red, 3 px — the classic GPS-trace look.
    fn default() -> Self {
        Self { color: Rgba([255, 0, 0, 255]), width: 3 }
    }
}

// ── Image file I/O ────────────────────────────────────────────────────────────

/// Load a static map image from disk.
///
/// A missing or unreadable file is reported immediately; nothing is
/// retained.
pub fn load_map_image(path: &Path) -> RenderResult<RgbaImage> {
    let img = image::open(path)?.to_rgba8();
    log::info!(
        "loaded map image {} ({}×{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Write an image to disk; the format is inferred from the extension.
pub fn save_image(img: &RgbaImage, path: &Path) -> RenderResult<()> {
    img.save(path)?;
    Ok(())
}

// ── Overlay drawing ───────────────────────────────────────────────────────────

/// Draw an ordered point sequence onto a copy of `map` and return the copy.
///
/// Consecutive points are joined by straight segments in projection space.
/// Points outside `bounds` project off-canvas; their segments are clipped
/// pixel-wise by the rasteriser rather than rejected, so a track that dips
/// out of the covered area draws its visible portion.
pub fn draw_track(
    map: &RgbaImage,
    bounds: &GeoBounds,
    points: &[GeoPoint],
    style: TrackStyle,
) -> RgbaImage {
    let mut out = map.clone();
    let dims = (out.width(), out.height());

    let pixels: Vec<(i64, i64)> = points.iter().map(|&p| to_pixel(bounds, dims, p)).collect();
    for pair in pixels.windows(2) {
        draw_segment(&mut out, pair[0], pair[1], style.color, style.width);
    }
    out
}

/// Draw a computed [`Route`] onto a copy of `map` and return the copy.
///
/// The route's node positions come from `network`; a trivial route draws
/// nothing.
pub fn draw_route(
    map: &RgbaImage,
    bounds: &GeoBounds,
    network: &RoadNetwork,
    route: &Route,
    style: TrackStyle,
) -> RgbaImage {
    let points: Vec<GeoPoint> = route
        .node_path(network)
        .into_iter()
        .map(|n| network.node_pos[n.index()])
        .collect();
    draw_track(map, bounds, &points, style)
}
