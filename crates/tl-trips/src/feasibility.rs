//! Ordered-pair feasibility scan.
//!
//! Trip `j` is *feasible after* trip `i` when a rider finishing `i` could
//! immediately start `j`: `j` departs no earlier than `i` arrives, from
//! exactly the coordinates where `i` ended.
//!
//! # Complexity
//!
//! The scan compares every ordered pair `(i, j)` with `j >= i` — O(n²).
//! This is acceptable for the small windows produced by
//! [`TripTable::filter_window`](crate::TripTable::filter_window) (a 12-hour
//! slice of a city's trips) and is **not** optimised away: the pair
//! semantics, including the self-pair case below, are part of the contract.
//!
//! # Self-pairs
//!
//! `i == j` is included.  A self-pair fires only for a trip whose start
//! equals its end in both time and place (a zero-advance circular trip).
//! Callers that consider such pairs degenerate can filter `i != j` from the
//! returned list.

use tl_core::GeoPoint;

use crate::Trip;

/// 1-based index pair `(i+1, j+1)`: the trip at `j` is feasible after the
/// trip at `i`.
pub type FeasiblePair = (usize, usize);

/// Scan `trips` (typically the output of a time-window filter) for all
/// feasible ordered pairs, in scan order.
pub fn feasible_pairs(trips: &[&Trip]) -> Vec<FeasiblePair> {
    let mut pairs = Vec::new();
    for i in 0..trips.len() {
        for j in i..trips.len() {
            if is_feasible_after(trips[i], trips[j]) {
                pairs.push((i + 1, j + 1));
            }
        }
    }
    pairs
}

/// Number of feasible pairs in `trips`.
pub fn feasible_pair_count(trips: &[&Trip]) -> usize {
    feasible_pairs(trips).len()
}

/// `later` is feasible after `earlier`: departs no earlier than `earlier`
/// arrives, from exactly the coordinates where `earlier` ended.
///
/// Location matching is exact f64 equality on both latitude and longitude,
/// as round-tripped through the CSV parser.  Station-based trip data shares
/// coordinate strings between records, so exact matching is the intended
/// semantics rather than a tolerance comparison.
#[inline]
fn is_feasible_after(earlier: &Trip, later: &Trip) -> bool {
    later.started_at >= earlier.ended_at && same_location(later.start, earlier.end)
}

#[inline]
fn same_location(a: GeoPoint, b: GeoPoint) -> bool {
    a.lat == b.lat && a.lon == b.lon
}
