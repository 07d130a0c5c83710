//! Travelled-distance aggregation over grouped trajectories.
//!
//! The distance of a group is the sum of great-circle distances between
//! consecutive points **in recording order**.  Pairs never bridge two
//! groups: the last point of one trajectory and the first point of the next
//! contribute nothing.

use std::collections::BTreeMap;

use tl_core::{GeoPoint, IndividualId};

use crate::table::GroupKey;

/// Total kilometres travelled per `(individual, trajectory)` group.
///
/// A group with zero or one points yields 0.0.  The result is
/// order-dependent: permuting a group's points changes its total.
pub fn travelled_km_by_group(
    groups: &BTreeMap<GroupKey, Vec<GeoPoint>>,
) -> BTreeMap<GroupKey, f64> {
    groups
        .iter()
        .map(|(&key, pts)| (key, polyline_km(pts)))
        .collect()
}

/// Total kilometres travelled per individual, folded over all of that
/// individual's trajectories.
pub fn travelled_km_by_individual(
    groups: &BTreeMap<GroupKey, Vec<GeoPoint>>,
) -> BTreeMap<IndividualId, f64> {
    let mut totals: BTreeMap<IndividualId, f64> = BTreeMap::new();
    for ((individual, _), pts) in groups {
        *totals.entry(*individual).or_insert(0.0) += polyline_km(pts);
    }
    totals
}

/// Sum of consecutive-pair distances along an ordered point sequence.
fn polyline_km(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_km(pair[1]))
        .sum()
}
