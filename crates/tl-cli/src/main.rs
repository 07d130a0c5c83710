//! `tripline` — command-line front end for the tl-* analytics crates.
//!
//! Each subcommand loads its inputs, runs one analysis, and prints a plain
//! text summary (or writes an image).  Nothing is cached between runs; all
//! state lives in the input files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use image::Rgba;
use structopt::StructOpt;

use tl_core::{GeoBounds, GeoPoint, TimeWindow};
use tl_render::TrackStyle;
use tl_track::TrackTable;
use tl_trips::TripTable;

#[cfg(feature = "osm")]
use tl_core::TravelMode;
#[cfg(feature = "osm")]
use tl_spatial::{DepotMatrix, GraphProvider, ShortestPaths, Weight, osm::PbfProvider};

// ── Constants ─────────────────────────────────────────────────────────────────

/// The Beijing region-of-interest box used by `clip-export`, as observed in
/// the trajectory dataset.
const BEIJING_CLIP: GeoBounds = GeoBounds {
    lat_top: 40.036496,
    lon_left: 116.129598,
    lat_bottom: 39.768824,
    lon_right: 116.685552,
};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(StructOpt)]
#[structopt(name = "tripline", about = "GPS trajectory and bike-trip analytics")]
enum Command {
    /// Print duration statistics for a trip CSV
    TripStats {
        /// Path to the trip CSV
        #[structopt(long)]
        trips: PathBuf,
    },
    /// Count feasible trip pairs inside a time window
    Feasible {
        /// Path to the trip CSV
        #[structopt(long)]
        trips: PathBuf,
        /// Window start, YYYY-MM-DD HH:MM:SS
        #[structopt(long, default_value = "2023-01-02 06:00:00")]
        from: String,
        /// Window end, YYYY-MM-DD HH:MM:SS
        #[structopt(long, default_value = "2023-01-02 18:00:00")]
        to: String,
    },
    /// Print kilometres travelled per individual in a trajectory CSV
    Travelled {
        /// Path to the trajectory CSV
        #[structopt(long)]
        tracks: PathBuf,
    },
    /// Clip a trajectory CSV to the Beijing box and export lat,lon rows
    ClipExport {
        /// Path to the trajectory CSV
        #[structopt(long)]
        tracks: PathBuf,
        /// Output path for the headerless lat,lon CSV
        #[structopt(long)]
        out: PathBuf,
    },
    /// Print the pairwise shortest-length matrix between trip depots
    #[cfg(feature = "osm")]
    DepotMatrix {
        /// Path to the trip CSV
        #[structopt(long)]
        trips: PathBuf,
        /// Place name resolved against the extract directory
        #[structopt(long, default_value = "Washington, United States")]
        place: String,
        /// Directory holding pre-downloaded .osm.pbf extracts
        #[structopt(long, default_value = "extracts")]
        extracts: PathBuf,
        /// Travel mode: drive, bike, or walk
        #[structopt(long, default_value = "bike")]
        mode: TravelMode,
        /// Edge weight: length or time
        #[structopt(long, default_value = "length")]
        weight: Weight,
        /// Number of depots to include in the matrix
        #[structopt(long, default_value = "3")]
        depots: usize,
        /// Lowest trip id considered for depot extraction
        #[structopt(long, default_value = "1")]
        from_id: u32,
        /// Highest trip id considered for depot extraction
        #[structopt(long, default_value = "100")]
        to_id: u32,
    },
    /// Draw the shortest route between two coordinates onto a map image
    #[cfg(feature = "osm")]
    RouteMap {
        /// Place name resolved against the extract directory
        #[structopt(long, default_value = "Washington, United States")]
        place: String,
        /// Directory holding pre-downloaded .osm.pbf extracts
        #[structopt(long, default_value = "extracts")]
        extracts: PathBuf,
        /// Travel mode: drive, bike, or walk
        #[structopt(long, default_value = "bike")]
        mode: TravelMode,
        /// Edge weight: length or time
        #[structopt(long, default_value = "length")]
        weight: Weight,
        /// Route start as lat,lon
        #[structopt(long, parse(try_from_str = parse_point))]
        start: GeoPoint,
        /// Route end as lat,lon
        #[structopt(long, parse(try_from_str = parse_point))]
        end: GeoPoint,
        /// Path to the static map image
        #[structopt(long)]
        map: PathBuf,
        /// Map bounding box as lat_top,lon_left,lat_bottom,lon_right
        #[structopt(long, parse(try_from_str = parse_bounds))]
        bounds: GeoBounds,
        /// Output image path
        #[structopt(long)]
        out: PathBuf,
        /// Stroke colour as r,g,b
        #[structopt(long, default_value = "255,0,0", parse(try_from_str = parse_color))]
        color: Rgba<u8>,
        /// Stroke width in pixels
        #[structopt(long, default_value = "3")]
        width: u32,
    },
    /// Draw a lat,lon point CSV onto a map image
    Render {
        /// Path to a headerless lat,lon CSV (see clip-export)
        #[structopt(long)]
        points: PathBuf,
        /// Path to the static map image
        #[structopt(long)]
        map: PathBuf,
        /// Map bounding box as lat_top,lon_left,lat_bottom,lon_right
        #[structopt(long, parse(try_from_str = parse_bounds))]
        bounds: GeoBounds,
        /// Output image path
        #[structopt(long)]
        out: PathBuf,
        /// Stroke colour as r,g,b
        #[structopt(long, default_value = "255,0,0", parse(try_from_str = parse_color))]
        color: Rgba<u8>,
        /// Stroke width in pixels
        #[structopt(long, default_value = "3")]
        width: u32,
    },
}

// ── Argument parsers ──────────────────────────────────────────────────────────

fn parse_point(s: &str) -> Result<GeoPoint> {
    let parts: Vec<&str> = s.split(',').collect();
    let [lat, lon] = parts.as_slice() else {
        anyhow::bail!("expected lat,lon — got {s:?}");
    };
    Ok(GeoPoint::new(lat.trim().parse()?, lon.trim().parse()?))
}

fn parse_bounds(s: &str) -> Result<GeoBounds> {
    let parts: Vec<&str> = s.split(',').collect();
    let [top, left, bottom, right] = parts.as_slice() else {
        anyhow::bail!("expected lat_top,lon_left,lat_bottom,lon_right — got {s:?}");
    };
    Ok(GeoBounds::new(
        top.trim().parse()?,
        left.trim().parse()?,
        bottom.trim().parse()?,
        right.trim().parse()?,
    ))
}

fn parse_color(s: &str) -> Result<Rgba<u8>> {
    let parts: Vec<&str> = s.split(',').collect();
    let [r, g, b] = parts.as_slice() else {
        anyhow::bail!("expected r,g,b — got {s:?}");
    };
    Ok(Rgba([r.trim().parse()?, g.trim().parse()?, b.trim().parse()?, 255]))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    match Command::from_args() {
        Command::TripStats { trips } => trip_stats(&trips),
        Command::Feasible { trips, from, to } => feasible(&trips, &from, &to),
        Command::Travelled { tracks } => travelled(&tracks),
        Command::ClipExport { tracks, out } => clip_export(&tracks, &out),
        #[cfg(feature = "osm")]
        Command::DepotMatrix {
            trips, place, extracts, mode, weight, depots, from_id, to_id,
        } => depot_matrix(&trips, &place, &extracts, mode, weight, depots, from_id, to_id),
        #[cfg(feature = "osm")]
        Command::RouteMap {
            place, extracts, mode, weight, start, end, map, bounds, out, color, width,
        } => route_map(
            &place, &extracts, mode, weight, start, end, &map, bounds, &out,
            TrackStyle { color, width },
        ),
        Command::Render { points, map, bounds, out, color, width } => {
            render(&points, &map, bounds, &out, TrackStyle { color, width })
        }
    }
}

// ── Subcommand handlers ───────────────────────────────────────────────────────

fn trip_stats(trips: &std::path::Path) -> Result<()> {
    let table = TripTable::load_csv(trips)
        .with_context(|| format!("loading trips from {}", trips.display()))?;

    println!("Trips loaded: {}", table.len());
    match table.max_duration_minutes() {
        Some(m) => println!("Maximum trip duration: {m} minutes"),
        None => println!("Maximum trip duration: n/a (no non-zero trips)"),
    }
    match table.min_duration_minutes() {
        Some(m) => {
            println!("Minimum trip duration: {m} minutes");
            println!("Trips with that duration: {}", table.count_with_duration(m));
        }
        None => println!("Minimum trip duration: n/a (no non-zero trips)"),
    }
    println!("Circular trips: {:.2} %", table.circular_trip_percent());
    Ok(())
}

fn feasible(trips: &std::path::Path, from: &str, to: &str) -> Result<()> {
    let table = TripTable::load_csv(trips)
        .with_context(|| format!("loading trips from {}", trips.display()))?;
    let window = TimeWindow::parse(from, to)?;

    let in_window = table.filter_window(window);
    let count = tl_trips::feasible_pair_count(&in_window);

    println!("Window: {window}");
    println!("Trips in window: {}", in_window.len());
    println!("Feasible trip pairs: {count}");
    Ok(())
}

fn travelled(tracks: &std::path::Path) -> Result<()> {
    let table = TrackTable::load_csv(tracks)
        .with_context(|| format!("loading trajectories from {}", tracks.display()))?;
    let groups = table.grouped();
    let totals = tl_track::travelled_km_by_individual(&groups);

    println!("{:<14} {:<12}", "Individual", "Distance km");
    println!("{}", "-".repeat(26));
    for (individual, km) in &totals {
        println!("{:<14} {:<12.3}", individual.0, km);
    }
    Ok(())
}

fn clip_export(tracks: &std::path::Path, out: &std::path::Path) -> Result<()> {
    let table = TrackTable::load_csv(tracks)
        .with_context(|| format!("loading trajectories from {}", tracks.display()))?;
    let inside = tl_track::clip_to_bounds(&table, BEIJING_CLIP);
    tl_track::export_points_csv(&inside, out)
        .with_context(|| format!("writing {}", out.display()))?;

    println!("Clipped {} of {} points into {}", inside.len(), table.len(), out.display());
    Ok(())
}

#[cfg(feature = "osm")]
#[allow(clippy::too_many_arguments)]
fn depot_matrix(
    trips: &std::path::Path,
    place: &str,
    extracts: &std::path::Path,
    mode: TravelMode,
    weight: Weight,
    depots: usize,
    from_id: u32,
    to_id: u32,
) -> Result<()> {
    let table = TripTable::load_csv(trips)
        .with_context(|| format!("loading trips from {}", trips.display()))?;

    let all_depots = tl_trips::unique_depots(table.trips(), from_id..=to_id);
    println!("Unique depots in trips {from_id}..={to_id}: {}", all_depots.len());

    let selected = &all_depots[..depots.min(all_depots.len())];
    let network = PbfProvider::new(extracts)
        .load(place, mode)
        .with_context(|| format!("loading {mode} network for {place:?}"))?;
    println!("Road network: {} nodes, {} edges", network.node_count(), network.edge_count());

    let matrix = DepotMatrix::build(&network, selected, weight)?;
    println!("Pairwise shortest length for {} depots (weight: {weight}):", matrix.size());
    println!();
    print!("{matrix}");
    match (matrix.max_positive(), matrix.min_positive()) {
        (Some(max), Some(min)) => {
            println!("Maximum shortest distance: {max}");
            println!("Minimum shortest distance: {min}");
        }
        _ => println!("No connected depot pairs."),
    }
    Ok(())
}

#[cfg(feature = "osm")]
#[allow(clippy::too_many_arguments)]
fn route_map(
    place: &str,
    extracts: &std::path::Path,
    mode: TravelMode,
    weight: Weight,
    start: GeoPoint,
    end: GeoPoint,
    map: &std::path::Path,
    bounds: GeoBounds,
    out: &std::path::Path,
    style: TrackStyle,
) -> Result<()> {
    let network = PbfProvider::new(extracts)
        .load(place, mode)
        .with_context(|| format!("loading {mode} network for {place:?}"))?;

    let from = network
        .nearest_node(start)
        .context("cannot snap start: network has no nodes")?;
    let to = network
        .nearest_node(end)
        .context("cannot snap end: network has no nodes")?;
    let route = network
        .shortest_route(from, to, weight)
        .with_context(|| format!("routing {start} → {end}"))?;
    println!("Route: {} edges, total {} ({weight})", route.edges.len(), route.total);

    let base = tl_render::load_map_image(map)?;
    let drawn = tl_render::draw_route(&base, &bounds, &network, &route, style);
    tl_render::save_image(&drawn, out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn render(
    points: &std::path::Path,
    map: &std::path::Path,
    bounds: GeoBounds,
    out: &std::path::Path,
    style: TrackStyle,
) -> Result<()> {
    let pts = tl_track::load_points_csv(points)
        .with_context(|| format!("loading points from {}", points.display()))?;
    let base = tl_render::load_map_image(map)?;
    let drawn = tl_render::draw_track(&base, &bounds, &pts, style);
    tl_render::save_image(&drawn, out)?;

    println!("Drew {} points onto {}", pts.len(), out.display());
    Ok(())
}
