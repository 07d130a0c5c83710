//! Unit tests for tl-track.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use crate::TrackTable;

    pub const SMALL_CSV: &str = "\
individual_id,trajectory_id,latitude,longitude
1,1,39.9847,116.3184
1,1,39.9947,116.3184
1,2,39.9947,116.3284
2,1,40.0000,116.0000
";

    pub fn small_table() -> TrackTable {
        TrackTable::load_reader(Cursor::new(SMALL_CSV)).unwrap()
    }
}

#[cfg(test)]
mod loading {
    use std::io::Cursor;

    use crate::{TrackError, TrackTable};

    #[test]
    fn row_count_and_order() {
        let table = super::helpers::small_table();
        assert_eq!(table.len(), 4);
        // File order is preserved.
        assert_eq!(table.points()[0].pos.lat, 39.9847);
        assert_eq!(table.points()[3].pos.lat, 40.0000);
    }

    #[test]
    fn malformed_row_aborts() {
        let csv = "individual_id,trajectory_id,latitude,longitude\n1,1,not_a_number,116.0\n";
        let err = TrackTable::load_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, TrackError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = TrackTable::load_csv(std::path::Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, TrackError::Io(_)));
    }

    #[test]
    fn extra_columns_ignored() {
        let csv = "individual_id,trajectory_id,latitude,longitude,timestamp\n\
                   1,1,39.0,116.0,2023-01-02 06:00:00\n";
        let table = TrackTable::load_reader(Cursor::new(csv)).unwrap();
        assert_eq!(table.len(), 1);
    }
}

#[cfg(test)]
mod grouping {
    use tl_core::{IndividualId, TrajectoryId};

    #[test]
    fn groups_split_by_key() {
        let groups = super::helpers::small_table().grouped();
        assert_eq!(groups.len(), 3);
        let g11 = &groups[&(IndividualId(1), TrajectoryId(1))];
        assert_eq!(g11.len(), 2);
        let g21 = &groups[&(IndividualId(2), TrajectoryId(1))];
        assert_eq!(g21.len(), 1);
    }

    #[test]
    fn within_group_order_preserved() {
        let groups = super::helpers::small_table().grouped();
        let g11 = &groups[&(tl_core::IndividualId(1), tl_core::TrajectoryId(1))];
        assert!(g11[0].lat < g11[1].lat); // first row first
    }
}

#[cfg(test)]
mod distance {
    use std::collections::BTreeMap;
    use std::io::Cursor;

    use tl_core::{GeoPoint, IndividualId, TrajectoryId};

    use crate::{TrackTable, travelled_km_by_group, travelled_km_by_individual};

    fn one_group(points: Vec<GeoPoint>) -> BTreeMap<crate::GroupKey, Vec<GeoPoint>> {
        let mut m = BTreeMap::new();
        m.insert((IndividualId(1), TrajectoryId(1)), points);
        m
    }

    #[test]
    fn empty_and_singleton_are_zero() {
        let key = (IndividualId(1), TrajectoryId(1));
        assert_eq!(travelled_km_by_group(&one_group(vec![]))[&key], 0.0);
        let single = one_group(vec![GeoPoint::new(39.9, 116.3)]);
        assert_eq!(travelled_km_by_group(&single)[&key], 0.0);
    }

    #[test]
    fn sum_of_consecutive_segments() {
        let a = GeoPoint::new(39.90, 116.30);
        let b = GeoPoint::new(39.95, 116.30);
        let c = GeoPoint::new(39.95, 116.40);
        let total = travelled_km_by_group(&one_group(vec![a, b, c]))
            [&(IndividualId(1), TrajectoryId(1))];
        let expected = a.distance_km(b) + b.distance_km(c);
        assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn permuting_points_changes_total() {
        // Non-collinear right-angle path: order must matter.
        let a = GeoPoint::new(39.90, 116.30);
        let b = GeoPoint::new(39.95, 116.30);
        let c = GeoPoint::new(39.95, 116.40);
        let key = (IndividualId(1), TrajectoryId(1));
        let abc = travelled_km_by_group(&one_group(vec![a, b, c]))[&key];
        let bac = travelled_km_by_group(&one_group(vec![b, a, c]))[&key];
        assert!((abc - bac).abs() > 1e-6);
    }

    #[test]
    fn right_triangle_known_lengths() {
        // Legs along a meridian and a parallel; each leg length is computable
        // from the great-circle formula independently of this crate.
        let a = GeoPoint::new(39.0, 116.0);
        let b = GeoPoint::new(40.0, 116.0); // 1° north: ~111.195 km
        let c = GeoPoint::new(40.0, 117.0); // 1° east at 40°N: ~85.18 km
        let key = (IndividualId(1), TrajectoryId(1));
        let total = travelled_km_by_group(&one_group(vec![a, b, c]))[&key];
        let leg1 = 111.195;
        let leg2 = std::f64::consts::PI / 180.0 * 6_371.0 * (40.0f64.to_radians().cos());
        assert!((total - (leg1 + leg2)).abs() < 1e-1, "got {total}");
    }

    #[test]
    fn per_individual_folds_trajectories() {
        let csv = "individual_id,trajectory_id,latitude,longitude\n\
                   1,1,39.90,116.30\n\
                   1,1,39.95,116.30\n\
                   1,2,39.95,116.30\n\
                   1,2,39.95,116.40\n";
        let groups = TrackTable::load_reader(Cursor::new(csv)).unwrap().grouped();
        let by_group = travelled_km_by_group(&groups);
        let by_ind = travelled_km_by_individual(&groups);
        let sum: f64 = by_group.values().sum();
        assert!((by_ind[&IndividualId(1)] - sum).abs() < 1e-12);
    }

    #[test]
    fn groups_do_not_bridge() {
        // Two one-point trajectories: no pair forms, total distance is zero,
        // even though the two points are far apart.
        let csv = "individual_id,trajectory_id,latitude,longitude\n\
                   1,1,39.90,116.30\n\
                   1,2,41.00,118.00\n";
        let groups = TrackTable::load_reader(Cursor::new(csv)).unwrap().grouped();
        let by_ind = travelled_km_by_individual(&groups);
        assert_eq!(by_ind[&IndividualId(1)], 0.0);
    }
}

#[cfg(test)]
mod export {
    use tl_core::{GeoBounds, GeoPoint};

    use crate::{clip_to_bounds, write_points_csv};

    #[test]
    fn clip_keeps_inside_points_in_order() {
        let table = super::helpers::small_table();
        let bounds = GeoBounds::new(40.0399, 116.0760, 39.7232, 116.7188);
        let inside = clip_to_bounds(&table, bounds);
        assert_eq!(inside.len(), 3); // (40.0, 116.0) falls west of the box
        assert_eq!(inside[0].lat, 39.9847);
    }

    #[test]
    fn export_is_headerless_lat_lon() {
        let points = vec![GeoPoint::new(39.9847, 116.3184), GeoPoint::new(40.0, 116.0)];
        let mut buf = Vec::new();
        write_points_csv(&points, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "39.9847,116.3184");
        assert_eq!(lines.next().unwrap(), "40,116");
        assert!(lines.next().is_none());
    }

    #[test]
    fn export_to_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clipped.csv");
        let points = vec![GeoPoint::new(39.5, 116.5)];
        crate::export_points_csv(&points, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), "39.5,116.5");
    }

    #[test]
    fn read_back_what_was_written() {
        let points = vec![GeoPoint::new(39.9847, 116.3184), GeoPoint::new(40.0, 116.0)];
        let mut buf = Vec::new();
        write_points_csv(&points, &mut buf).unwrap();
        let back = crate::read_points_csv(std::io::Cursor::new(buf)).unwrap();
        assert_eq!(back, points);
    }
}
