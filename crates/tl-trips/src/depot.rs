//! Depot extraction from trip endpoints.
//!
//! A depot is a unique coordinate pair observed as a trip start or end
//! within a trip-id range.  Bike-share data encodes stations as exact
//! repeated coordinates, so deduplication is exact equality, and the
//! returned order is first-seen order (start before end for each trip).

use std::ops::RangeInclusive;

use tl_core::GeoPoint;

use crate::Trip;

/// Collect the unique depot coordinates of trips whose `trip_id` falls in
/// `id_range`.
///
/// The candidate set is small (bounded by twice the trips in range), so the
/// linear `contains` dedup mirrors the dataset's scale rather than pulling
/// in a hashed float key.
pub fn unique_depots(trips: &[Trip], id_range: RangeInclusive<u32>) -> Vec<GeoPoint> {
    let mut depots: Vec<GeoPoint> = Vec::new();

    for trip in trips.iter().filter(|t| id_range.contains(&t.id.0)) {
        for pos in [trip.start, trip.end] {
            if !depots.contains(&pos) {
                depots.push(pos);
            }
        }
    }

    depots
}
