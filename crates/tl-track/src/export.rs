//! Bounding-box clip and point-list CSV I/O.
//!
//! The exchange format is headerless `lat,lon` rows — the same shape the
//! overlay renderer consumes, so a clipped region can be fed straight into
//! `tl-render`.

use std::io::{Read, Write};
use std::path::Path;

use tl_core::{GeoBounds, GeoPoint};

use crate::table::TrackTable;
use crate::{TrackError, TrackResult};

/// Keep only the points of `table` that fall inside `bounds`, in file order.
pub fn clip_to_bounds(table: &TrackTable, bounds: GeoBounds) -> Vec<GeoPoint> {
    table
        .points()
        .iter()
        .map(|p| p.pos)
        .filter(|pos| bounds.contains(*pos))
        .collect()
}

/// Write `points` as headerless `lat,lon` rows to a file.
pub fn export_points_csv(points: &[GeoPoint], path: &Path) -> TrackResult<()> {
    let file = std::fs::File::create(path).map_err(TrackError::Io)?;
    write_points_csv(points, file)
}

/// Like [`export_points_csv`] but writes to any `Write` sink.
pub fn write_points_csv<W: Write>(points: &[GeoPoint], writer: W) -> TrackResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for p in points {
        csv_writer.write_record(&[p.lat.to_string(), p.lon.to_string()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Read headerless `lat,lon` rows from a file, in file order.
pub fn load_points_csv(path: &Path) -> TrackResult<Vec<GeoPoint>> {
    let file = std::fs::File::open(path).map_err(TrackError::Io)?;
    read_points_csv(file)
}

/// Like [`load_points_csv`] but reads from any `Read` source.
pub fn read_points_csv<R: Read>(reader: R) -> TrackResult<Vec<GeoPoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut points = Vec::new();
    for result in csv_reader.deserialize::<(f64, f64)>() {
        let (lat, lon) = result.map_err(|e| TrackError::Parse(e.to_string()))?;
        points.push(GeoPoint::new(lat, lon));
    }
    Ok(points)
}
