//! `tl-spatial` — road network, shortest paths, and depot distance matrices.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`network`]  | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`         |
//! | [`router`]   | `Weight`, `Route`, `ShortestPaths` trait, Dijkstra         |
//! | [`matrix`]   | `DepotMatrix` pairwise shortest-length matrix, `NO_PATH`   |
//! | [`provider`] | `GraphProvider` trait (place + travel mode → network)      |
//! | [`osm`]      | `load_from_pbf`, `PbfProvider` (feature = `"osm"` only)    |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.              |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod matrix;
pub mod network;
pub mod provider;
pub mod router;

#[cfg(feature = "osm")]
pub mod osm;


pub use error::{SpatialError, SpatialResult};
pub use matrix::{DepotMatrix, NO_PATH};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use provider::GraphProvider;
pub use router::{Route, ShortestPaths, Weight};
