//! `tl-core` — foundational types for the `tripline` analytics toolkit.
//!
//! This crate is a dependency of every other `tl-*` crate.  It intentionally
//! has no `tl-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`ids`]     | `IndividualId`, `TrajectoryId`, `TripId`, `NodeId`, `EdgeId` |
//! | [`geo`]     | `GeoPoint`, haversine distance, `GeoBounds`              |
//! | [`time`]    | timestamp parsing, `TimeWindow`, duration helpers        |
//! | [`mode`]    | `TravelMode` enum                                        |
//! | [`error`]   | `TlError`, `TlResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod mode;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TlError, TlResult};
pub use geo::{GeoBounds, GeoPoint};
pub use ids::{EdgeId, IndividualId, NodeId, TrajectoryId, TripId};
pub use mode::TravelMode;
pub use time::{TimeWindow, duration_minutes, parse_timestamp};
