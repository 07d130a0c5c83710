//! `tl-trips` — bike-trip records and derived metrics.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`table`]       | `Trip`, `TripTable`, CSV loading, duration statistics  |
//! | [`feasibility`] | ordered-pair feasibility scan over a trip window       |
//! | [`depot`]       | unique depot extraction from trip endpoints            |
//! | [`error`]       | `TripError`, `TripResult<T>`                           |

pub mod depot;
pub mod error;
pub mod feasibility;
pub mod table;


pub use depot::unique_depots;
pub use error::{TripError, TripResult};
pub use feasibility::{feasible_pair_count, feasible_pairs};
pub use table::{Trip, TripTable};
