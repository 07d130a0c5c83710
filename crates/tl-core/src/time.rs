//! Wall-clock time handling for trip records.
//!
//! Trip CSVs carry naive local timestamps (`YYYY-MM-DD HH:MM:SS`, no zone).
//! They are parsed into `chrono::NaiveDateTime` and compared directly; all
//! records in one dataset share the same implicit zone, so naive comparison
//! is exact.

use chrono::NaiveDateTime;

use crate::TlError;

/// Format of every timestamp column in the trip CSVs.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a trip timestamp, e.g. `"2023-01-02 06:00:00"`.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TlError> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| TlError::Parse(format!("invalid timestamp {s:?}: {e}")))
}

/// Elapsed time from `start` to `end` in fractional minutes.
///
/// Negative if `end` precedes `start`; callers decide whether that is an
/// error or a degenerate record to filter out.
#[inline]
pub fn duration_minutes(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 60.0
}

// ── TimeWindow ────────────────────────────────────────────────────────────────

/// A closed wall-clock interval `[start, end]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parse a window from two timestamp strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, TlError> {
        Ok(Self::new(parse_timestamp(start)?, parse_timestamp(end)?))
    }

    /// `true` if `t` lies inside the window (endpoints inclusive).
    #[inline]
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        t >= self.start && t <= self.end
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} .. {}]",
            self.start.format(TIMESTAMP_FORMAT),
            self.end.format(TIMESTAMP_FORMAT)
        )
    }
}
