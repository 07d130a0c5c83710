//! Trajectory CSV loader and grouping.
//!
//! # CSV format
//!
//! One row per GPS fix:
//!
//! ```csv
//! individual_id,trajectory_id,latitude,longitude
//! 1,1,39.984702,116.318417
//! 1,1,39.984683,116.318450
//! 2,1,39.984611,116.318026
//! ```
//!
//! Row order **is** the recorded sequence order.  The loader never re-sorts
//! rows: consecutive-pair distances are only meaningful in recording order,
//! and the renderer connects points in the same order.
//!
//! Extra columns (e.g. a timestamp) are ignored; the four named columns are
//! required and a malformed row aborts the load.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tl_core::{GeoPoint, IndividualId, TrajectoryId};

use crate::{TrackError, TrackResult};

/// Grouping key for trajectory points: one recorded track of one individual.
pub type GroupKey = (IndividualId, TrajectoryId);

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TrackRecord {
    individual_id: u32,
    trajectory_id: u32,
    latitude: f64,
    longitude: f64,
}

// ── TrackPoint ────────────────────────────────────────────────────────────────

/// One GPS fix, in recording order within its trajectory.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackPoint {
    pub individual: IndividualId,
    pub trajectory: TrajectoryId,
    pub pos: GeoPoint,
}

// ── TrackTable ────────────────────────────────────────────────────────────────

/// An in-memory trajectory dataset in file order.
#[derive(Debug, Default)]
pub struct TrackTable {
    points: Vec<TrackPoint>,
}

impl TrackTable {
    /// Load a trajectory CSV from disk.
    ///
    /// A missing or unreadable file is reported immediately as
    /// [`TrackError::Io`]; no partial table is retained.
    pub fn load_csv(path: &Path) -> TrackResult<Self> {
        let file = std::fs::File::open(path).map_err(TrackError::Io)?;
        let table = Self::load_reader(file)?;
        log::info!("loaded {} trajectory points from {}", table.len(), path.display());
        Ok(table)
    }

    /// Like [`load_csv`](Self::load_csv) but accepts any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`).
    pub fn load_reader<R: Read>(reader: R) -> TrackResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut points = Vec::new();

        for result in csv_reader.deserialize::<TrackRecord>() {
            let row = result.map_err(|e| TrackError::Parse(e.to_string()))?;
            points.push(TrackPoint {
                individual: IndividualId(row.individual_id),
                trajectory: TrajectoryId(row.trajectory_id),
                pos: GeoPoint::new(row.latitude, row.longitude),
            });
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in file order.
    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    /// Group points by `(individual, trajectory)`.
    ///
    /// Keys come out in sorted order (deterministic iteration); the points
    /// inside each group keep their recording order.
    pub fn grouped(&self) -> BTreeMap<GroupKey, Vec<GeoPoint>> {
        let mut groups: BTreeMap<GroupKey, Vec<GeoPoint>> = BTreeMap::new();
        for p in &self.points {
            groups
                .entry((p.individual, p.trajectory))
                .or_default()
                .push(p.pos);
        }
        groups
    }
}
