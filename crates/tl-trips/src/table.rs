//! Trip CSV loader and duration statistics.
//!
//! # CSV format
//!
//! One row per trip, timestamps in `YYYY-MM-DD HH:MM:SS`:
//!
//! ```csv
//! trip_id,started_at,ended_at,start_lat,start_lng,end_lat,end_lng
//! 1,2023-01-02 06:01:00,2023-01-02 06:14:00,38.9055,-77.0021,38.9063,-76.9832
//! ```
//!
//! Trips are immutable once loaded.  Duration statistics follow the source
//! dataset's convention of excluding zero-duration records (docking errors
//! produce start == end rows), while the time-window filter operates on the
//! full table.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;

use tl_core::{GeoPoint, TimeWindow, TripId, duration_minutes, parse_timestamp};

use crate::{TripError, TripResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TripRecord {
    trip_id: u32,
    started_at: String,
    ended_at: String,
    start_lat: f64,
    start_lng: f64,
    end_lat: f64,
    end_lng: f64,
}

// ── Trip ──────────────────────────────────────────────────────────────────────

/// One bike trip: a timestamped start and end state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl Trip {
    /// Trip duration in fractional minutes.
    #[inline]
    pub fn duration_minutes(&self) -> f64 {
        duration_minutes(self.started_at, self.ended_at)
    }

    /// `true` if the trip starts and ends at exactly the same coordinates.
    #[inline]
    pub fn is_circular(&self) -> bool {
        self.start == self.end
    }
}

// ── TripTable ─────────────────────────────────────────────────────────────────

/// An in-memory trip dataset in file order.
#[derive(Debug, Default)]
pub struct TripTable {
    trips: Vec<Trip>,
}

impl TripTable {
    /// Load a trip CSV from disk.
    ///
    /// A missing or unreadable file is reported immediately as
    /// [`TripError::Io`]; no partial table is retained.
    pub fn load_csv(path: &Path) -> TripResult<Self> {
        let file = std::fs::File::open(path).map_err(TripError::Io)?;
        let table = Self::load_reader(file)?;
        log::info!("loaded {} trips from {}", table.len(), path.display());
        Ok(table)
    }

    /// Like [`load_csv`](Self::load_csv) but accepts any `Read` source.
    pub fn load_reader<R: Read>(reader: R) -> TripResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut trips = Vec::new();

        for result in csv_reader.deserialize::<TripRecord>() {
            let row = result.map_err(|e| TripError::Parse(e.to_string()))?;
            trips.push(Trip {
                id: TripId(row.trip_id),
                started_at: parse_timestamp(&row.started_at)?,
                ended_at: parse_timestamp(&row.ended_at)?,
                start: GeoPoint::new(row.start_lat, row.start_lng),
                end: GeoPoint::new(row.end_lat, row.end_lng),
            });
        }

        Ok(Self { trips })
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// All trips in file order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    // ── Duration statistics ───────────────────────────────────────────────

    /// Trips with a non-zero duration, in file order.
    pub fn non_zero_trips(&self) -> impl Iterator<Item = &Trip> {
        self.trips.iter().filter(|t| t.duration_minutes() != 0.0)
    }

    /// Longest non-zero trip duration in minutes.  `None` on an empty table.
    pub fn max_duration_minutes(&self) -> Option<f64> {
        self.non_zero_trips()
            .map(|t| t.duration_minutes())
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.max(d))))
    }

    /// Shortest non-zero trip duration in minutes.  `None` on an empty table.
    pub fn min_duration_minutes(&self) -> Option<f64> {
        self.non_zero_trips()
            .map(|t| t.duration_minutes())
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.min(d))))
    }

    /// Number of non-zero trips with exactly the given duration in minutes.
    pub fn count_with_duration(&self, minutes: f64) -> usize {
        self.non_zero_trips()
            .filter(|t| t.duration_minutes() == minutes)
            .count()
    }

    /// Percentage of non-zero trips that start and end at the same
    /// coordinates.  0.0 when there are no non-zero trips.
    pub fn circular_trip_percent(&self) -> f64 {
        let total = self.non_zero_trips().count();
        if total == 0 {
            return 0.0;
        }
        let circular = self.non_zero_trips().filter(|t| t.is_circular()).count();
        circular as f64 / total as f64 * 100.0
    }

    // ── Filtering ─────────────────────────────────────────────────────────

    /// Trips whose start **and** end timestamps both fall inside `window`,
    /// in file order.
    pub fn filter_window(&self, window: TimeWindow) -> Vec<&Trip> {
        self.trips
            .iter()
            .filter(|t| window.contains(t.started_at) && window.contains(t.ended_at))
            .collect()
    }
}
