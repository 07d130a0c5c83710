//! Unit tests for tl-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId, TripId};

    #[test]
    fn index_roundtrip() {
        let id = TripId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TripId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(TripId(0) < TripId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(TripId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoBounds, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(39.9042, 116.4074);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km on the mean-radius sphere
        let a = GeoPoint::new(39.0, 116.0);
        let b = GeoPoint::new(40.0, 116.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(38.9055, -77.0021);
        let b = GeoPoint::new(38.9063, -76.9832);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-12);
    }

    #[test]
    fn bounds_contains_edges() {
        let b = GeoBounds::new(40.0, 116.0, 39.0, 117.0);
        assert!(b.contains(GeoPoint::new(39.5, 116.5)));
        // All four corners are inclusive.
        assert!(b.contains(GeoPoint::new(40.0, 116.0)));
        assert!(b.contains(GeoPoint::new(39.0, 117.0)));
        assert!(!b.contains(GeoPoint::new(40.1, 116.5)));
        assert!(!b.contains(GeoPoint::new(39.5, 115.9)));
    }

    #[test]
    fn bounds_spans() {
        let b = GeoBounds::new(40.0399, 116.0760, 39.7232, 116.7188);
        assert!((b.lat_span() - 0.3167).abs() < 1e-9);
        assert!((b.lon_span() - 0.6428).abs() < 1e-9);
    }
}

#[cfg(test)]
mod time {
    use crate::{TimeWindow, duration_minutes, parse_timestamp};

    #[test]
    fn parse_and_format() {
        let t = parse_timestamp("2023-01-02 06:00:00").unwrap();
        assert_eq!(t.format("%H:%M").to_string(), "06:00");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_timestamp("not a time").is_err());
        assert!(parse_timestamp("2023-13-40 99:00:00").is_err());
    }

    #[test]
    fn fractional_minutes() {
        let a = parse_timestamp("2023-01-02 06:00:00").unwrap();
        let b = parse_timestamp("2023-01-02 06:01:30").unwrap();
        assert_eq!(duration_minutes(a, b), 1.5);
        assert_eq!(duration_minutes(b, a), -1.5);
    }

    #[test]
    fn window_endpoints_inclusive() {
        let w = TimeWindow::parse("2023-01-02 06:00:00", "2023-01-02 18:00:00").unwrap();
        assert!(w.contains(parse_timestamp("2023-01-02 06:00:00").unwrap()));
        assert!(w.contains(parse_timestamp("2023-01-02 18:00:00").unwrap()));
        assert!(!w.contains(parse_timestamp("2023-01-02 18:00:01").unwrap()));
    }
}

#[cfg(test)]
mod mode {
    use crate::TravelMode;

    #[test]
    fn parse_roundtrip() {
        for mode in [TravelMode::Drive, TravelMode::Bike, TravelMode::Walk] {
            assert_eq!(mode.as_str().parse::<TravelMode>().unwrap(), mode);
        }
    }

    #[test]
    fn parse_unknown_fails() {
        assert!("rocket".parse::<TravelMode>().is_err());
    }
}
