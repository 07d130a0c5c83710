//! Abstract road-graph provider.
//!
//! The toolkit treats map data as an external collaborator: something that,
//! given a place name and a travel mode, hands back a ready-to-query
//! [`RoadNetwork`].  Everything downstream (snapping, routing, matrices)
//! only sees the network, never the provider's data source.

use tl_core::TravelMode;

use crate::SpatialResult;
use crate::network::RoadNetwork;

/// Supplies a road network for a named place and travel mode.
///
/// Implementations may read a local OSM extract (see
/// [`PbfProvider`](crate::osm::PbfProvider), feature `osm`), a cached
/// serialized graph, or a synthetic fixture in tests.
pub trait GraphProvider {
    fn load(&self, place: &str, mode: TravelMode) -> SpatialResult<RoadNetwork>;
}
