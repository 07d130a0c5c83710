//! Integer segment rasterisation.
//!
//! Bresenham's algorithm over `i64` pixel coordinates, stamping a square
//! brush of the requested width at every step.  Coordinates may lie outside
//! the canvas: each brush pixel is bounds-checked individually, so a segment
//! that leaves the image simply stops producing pixels.

use image::{Rgba, RgbaImage};

/// Draw the segment from `a` to `b` in `color` with a square brush of side
/// `width` (minimum 1).
pub fn draw_segment(
    img: &mut RgbaImage,
    a: (i64, i64),
    b: (i64, i64),
    color: Rgba<u8>,
    width: u32,
) {
    let (mut x, mut y) = a;
    let (x1, y1) = b;

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp(img, x, y, color, width);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Stamp a `width`×`width` square centred on `(x, y)`, skipping pixels that
/// fall outside the canvas.
fn stamp(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, width: u32) {
    let half = i64::from(width) / 2;
    let side = i64::from(width.max(1));
    for oy in 0..side {
        for ox in 0..side {
            let px = x + ox - half;
            let py = y + oy - half;
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
