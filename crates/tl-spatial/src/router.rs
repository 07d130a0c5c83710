//! Shortest-path queries over the road graph.
//!
//! # Capability interface
//!
//! Consumers of shortest paths (notably the depot matrix builder) need only
//! two operations: snap a coordinate to the nearest graph node, and ask for
//! the shortest-path length between two nodes under a chosen edge weight.
//! The [`ShortestPaths`] trait captures exactly that pair, so any engine —
//! this crate's Dijkstra, a contraction hierarchy, or a remote routing
//! service — satisfies the contract.
//!
//! # Weights
//!
//! Edge costs are `f64` and must be non-negative.  The binary heap orders
//! candidates with `f64::total_cmp`, with `NodeId` as a deterministic
//! tie-break.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::str::FromStr;

use tl_core::{EdgeId, GeoPoint, NodeId, TlError};

use crate::SpatialError;
use crate::network::RoadNetwork;

// ── Weight ────────────────────────────────────────────────────────────────────

/// Edge-weight selector for shortest-path queries.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    /// Physical edge length in metres (the default optimizer).
    #[default]
    Length,
    /// Travel time in seconds at the network's mode speed.
    TravelTime,
}

impl Weight {
    /// Cost of one edge under this selector.
    #[inline]
    pub fn edge_cost(self, network: &RoadNetwork, edge: EdgeId) -> f64 {
        match self {
            Weight::Length => network.edge_length_m[edge.index()],
            Weight::TravelTime => network.edge_travel_secs[edge.index()],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weight::Length => "length",
            Weight::TravelTime => "time",
        }
    }
}

impl FromStr for Weight {
    type Err = TlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(Weight::Length),
            "time" => Ok(Weight::TravelTime),
            other => Err(TlError::Config(format!(
                "unknown weight {other:?}: expected \"length\" or \"time\""
            ))),
        }
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: an ordered list of `EdgeId`s and the total
/// cost under the query's weight.
#[derive(Debug, Clone)]
pub struct Route {
    /// Edges to traverse in order, from source to destination.
    pub edges: Vec<EdgeId>,
    /// Cumulative cost (metres for [`Weight::Length`], seconds for
    /// [`Weight::TravelTime`]).
    pub total: f64,
}

impl Route {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// The node sequence of this route, source first.
    ///
    /// Empty for a trivial route (the caller knows the single node already).
    pub fn node_path(&self, network: &RoadNetwork) -> Vec<NodeId> {
        let Some(&first) = self.edges.first() else {
            return Vec::new();
        };
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        nodes.push(network.edge_from[first.index()]);
        for e in &self.edges {
            nodes.push(network.edge_to[e.index()]);
        }
        nodes
    }
}

// ── ShortestPaths trait ───────────────────────────────────────────────────────

/// The two spatial operations the matrix builder consumes.
///
/// `path_length` returns `None` when no path exists; it must not treat an
/// unreachable pair as an error, so a batch of queries can record a sentinel
/// and continue.
pub trait ShortestPaths {
    /// Snap a coordinate to the nearest graph node, or `None` if the graph
    /// has no nodes.
    fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId>;

    /// Shortest-path length from `from` to `to` under `weight`, or `None`
    /// if no path exists.
    fn path_length(&self, from: NodeId, to: NodeId, weight: Weight) -> Option<f64>;
}

impl ShortestPaths for RoadNetwork {
    fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.snap_to_node(pos)
    }

    fn path_length(&self, from: NodeId, to: NodeId, weight: Weight) -> Option<f64> {
        match self.shortest_route(from, to, weight) {
            Ok(route) => Some(route.total),
            Err(_) => None,
        }
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

impl RoadNetwork {
    /// Shortest route from `from` to `to` under `weight`, with the edge
    /// sequence for plotting.
    ///
    /// `from == to` is a trivial empty route, not an error.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NoPath`] if `to` is unreachable from `from`.
    pub fn shortest_route(
        &self,
        from: NodeId,
        to: NodeId,
        weight: Weight,
    ) -> Result<Route, SpatialError> {
        dijkstra(self, from, to, weight)
    }
}

/// Min-heap entry ordered by ascending cost, ties broken by `NodeId`.
struct Candidate {
    cost: f64,
    node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the cheapest on top.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(
    network: &RoadNetwork,
    from: NodeId,
    to: NodeId,
    weight: Weight,
) -> Result<Route, SpatialError> {
    if from.index() >= network.node_count() {
        return Err(SpatialError::NodeNotFound(from));
    }
    if to.index() >= network.node_count() {
        return Err(SpatialError::NodeNotFound(to));
    }
    if from == to {
        return Ok(Route { edges: vec![], total: 0.0 });
    }

    let n = network.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap: BinaryHeap<Candidate> = BinaryHeap::new();
    heap.push(Candidate { cost: 0.0, node: from });

    while let Some(Candidate { cost, node }) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, prev_edge, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost + weight.edge_cost(network, edge);

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Candidate { cost: new_cost, node: neighbor });
            }
        }
    }

    Err(SpatialError::NoPath { from, to })
}

fn reconstruct(
    network: &RoadNetwork,
    prev_edge: Vec<EdgeId>,
    to: NodeId,
    total: f64,
) -> Route {
    let mut edges = Vec::new();
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        edges.push(e);
        cur = network.edge_from[e.index()];
    }
    edges.reverse();
    Route { edges, total }
}
