//! `tl-render` — drawing GPS tracks onto a pre-downloaded static map image.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`project`] | lat/lon → pixel projection, axis tick generation          |
//! | [`raster`]  | Bresenham segment rasteriser with brush width             |
//! | [`overlay`] | `TrackStyle`, `draw_track`, `draw_route`, image file I/O  |
//! | [`error`]   | `RenderError`, `RenderResult<T>`                          |

pub mod error;
pub mod overlay;
pub mod project;
pub mod raster;

#[cfg(test)]
mod tests;

pub use error::{RenderError, RenderResult};
pub use overlay::{TrackStyle, draw_route, draw_track, load_map_image, save_image};
pub use project::{axis_ticks, to_pixel};
