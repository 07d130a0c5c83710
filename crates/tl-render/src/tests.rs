//! Unit tests for tl-render.

#[cfg(test)]
mod helpers {
    use tl_core::GeoBounds;

    /// The Beijing-area box used throughout the sample data, as
    /// (top, left, bottom, right).
    pub fn beijing_bounds() -> GeoBounds {
        GeoBounds::new(40.0399, 116.0760, 39.7232, 116.7188)
    }

    pub fn blank_map(w: u32, h: u32) -> image::RgbaImage {
        image::RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]))
    }
}

#[cfg(test)]
mod projection {
    use tl_core::GeoPoint;

    use crate::to_pixel;

    #[test]
    fn top_left_corner_is_origin() {
        let b = super::helpers::beijing_bounds();
        let (x, y) = to_pixel(&b, (800, 600), GeoPoint::new(b.lat_top, b.lon_left));
        assert_eq!((x, y), (0, 0));
    }

    #[test]
    fn bottom_right_corner_is_width_height() {
        let b = super::helpers::beijing_bounds();
        let (x, y) = to_pixel(&b, (800, 600), GeoPoint::new(b.lat_bottom, b.lon_right));
        assert_eq!((x, y), (800, 600));
    }

    #[test]
    fn latitude_axis_is_inverted() {
        let b = super::helpers::beijing_bounds();
        let north = to_pixel(&b, (800, 600), GeoPoint::new(40.0, 116.4));
        let south = to_pixel(&b, (800, 600), GeoPoint::new(39.8, 116.4));
        // Farther north → smaller row index.
        assert!(north.1 < south.1);
        assert_eq!(north.0, south.0);
    }

    #[test]
    fn out_of_bounds_projects_off_canvas() {
        let b = super::helpers::beijing_bounds();
        let west = to_pixel(&b, (800, 600), GeoPoint::new(39.9, 115.0));
        assert!(west.0 < 0);
        let north = to_pixel(&b, (800, 600), GeoPoint::new(41.0, 116.4));
        assert!(north.1 < 0);
    }
}

#[cfg(test)]
mod ticks {
    use crate::axis_ticks;

    #[test]
    fn counts_and_order() {
        let b = super::helpers::beijing_bounds();
        let (lon, lat) = axis_ticks(&b, 7, 8);
        assert_eq!(lon.len(), 7);
        assert_eq!(lat.len(), 8);
        assert!(lon.windows(2).all(|w| w[0] < w[1]));
        // Latitudes come out descending: row 0 is the northern edge.
        assert!(lat.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn endpoints_are_the_bounds_rounded() {
        let b = super::helpers::beijing_bounds();
        let (lon, lat) = axis_ticks(&b, 7, 8);
        assert_eq!(lon[0], 116.076);
        assert_eq!(*lon.last().unwrap(), 116.7188);
        assert_eq!(lat[0], 40.0399);
        assert_eq!(*lat.last().unwrap(), 39.7232);
    }

    #[test]
    fn four_decimal_rounding() {
        let b = super::helpers::beijing_bounds();
        let (lon, _) = axis_ticks(&b, 7, 8);
        for v in lon {
            assert_eq!(v, (v * 10_000.0).round() / 10_000.0);
        }
    }
}

#[cfg(test)]
mod raster {
    use image::Rgba;

    use crate::raster::draw_segment;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn endpoints_are_painted() {
        let mut img = super::helpers::blank_map(20, 20);
        draw_segment(&mut img, (2, 2), (15, 9), RED, 1);
        assert_eq!(*img.get_pixel(2, 2), RED);
        assert_eq!(*img.get_pixel(15, 9), RED);
    }

    #[test]
    fn width_thickens_the_stroke() {
        let mut img = super::helpers::blank_map(20, 20);
        draw_segment(&mut img, (5, 10), (15, 10), RED, 3);
        // A horizontal 3 px stroke covers the rows above and below.
        assert_eq!(*img.get_pixel(10, 9), RED);
        assert_eq!(*img.get_pixel(10, 10), RED);
        assert_eq!(*img.get_pixel(10, 11), RED);
        assert_ne!(*img.get_pixel(10, 13), RED);
    }

    #[test]
    fn off_canvas_segment_does_not_panic() {
        let mut img = super::helpers::blank_map(10, 10);
        draw_segment(&mut img, (-20, -5), (25, 30), RED, 3);
        // The visible middle portion is painted; the call simply returns.
        let painted = img.pixels().filter(|p| **p == RED).count();
        assert!(painted > 0);
    }

    #[test]
    fn fully_outside_segment_paints_nothing() {
        let mut img = super::helpers::blank_map(10, 10);
        draw_segment(&mut img, (-30, -30), (-20, -20), RED, 3);
        assert!(img.pixels().all(|p| *p != RED));
    }
}

#[cfg(test)]
mod overlay {
    use image::Rgba;

    use tl_core::GeoPoint;

    use crate::{TrackStyle, draw_track, load_map_image, save_image};

    #[test]
    fn input_map_is_not_mutated() {
        let map = super::helpers::blank_map(100, 80);
        let b = super::helpers::beijing_bounds();
        let pts = vec![GeoPoint::new(39.9, 116.2), GeoPoint::new(39.9, 116.6)];
        let out = draw_track(&map, &b, &pts, TrackStyle::default());

        assert!(map.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
        assert!(out.pixels().any(|p| *p == Rgba([255, 0, 0, 255])));
    }

    #[test]
    fn single_point_draws_nothing() {
        let map = super::helpers::blank_map(100, 80);
        let b = super::helpers::beijing_bounds();
        let out = draw_track(&map, &b, &[GeoPoint::new(39.9, 116.4)], TrackStyle::default());
        assert!(out.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let map = super::helpers::blank_map(16, 16);
        save_image(&map, &path).unwrap();
        let back = load_map_image(&path).unwrap();
        assert_eq!(back.dimensions(), (16, 16));
    }

    #[test]
    fn missing_map_file_is_an_error() {
        assert!(load_map_image(std::path::Path::new("/no/such/map.png")).is_err());
    }
}

#[cfg(test)]
mod route_overlay {
    use image::Rgba;

    use tl_core::{GeoBounds, GeoPoint};
    use tl_spatial::{RoadNetworkBuilder, Weight};

    use crate::{TrackStyle, draw_route};

    #[test]
    fn route_polyline_is_drawn() {
        // Two nodes inside the box, one road between them.
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(39.80, 116.20));
        let c = b.add_node(GeoPoint::new(39.95, 116.60));
        b.add_road(a, c, 100.0, 24.0);
        let net = b.build();
        let route = net.shortest_route(a, c, Weight::Length).unwrap();

        let bounds = GeoBounds::new(40.0399, 116.0760, 39.7232, 116.7188);
        let map = super::helpers::blank_map(100, 80);
        let out = draw_route(&map, &bounds, &net, &route, TrackStyle::default());
        assert!(out.pixels().any(|p| *p == Rgba([255, 0, 0, 255])));
    }
}
