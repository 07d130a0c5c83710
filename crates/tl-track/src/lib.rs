//! `tl-track` — GPS trajectory ingest and distance aggregation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`table`]    | `TrackPoint`, `TrackTable`, CSV loading, grouping         |
//! | [`distance`] | travelled-distance aggregation over grouped trajectories  |
//! | [`export`]   | bounding-box clip and headerless lat,lon CSV export       |
//! | [`error`]    | `TrackError`, `TrackResult<T>`                            |

pub mod distance;
pub mod error;
pub mod export;
pub mod table;

#[cfg(test)]
mod tests;

pub use distance::{travelled_km_by_group, travelled_km_by_individual};
pub use error::{TrackError, TrackResult};
pub use export::{
    clip_to_bounds, export_points_csv, load_points_csv, read_points_csv, write_points_csv,
};
pub use table::{GroupKey, TrackPoint, TrackTable};
