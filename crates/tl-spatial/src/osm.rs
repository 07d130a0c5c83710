//! OSM PBF loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use tl_core::TravelMode;
//! use tl_spatial::osm::load_from_pbf;
//!
//! let network = load_from_pbf(Path::new("washington-dc.osm.pbf"), TravelMode::Bike)?;
//! ```
//!
//! # What is loaded
//!
//! Only `highway=*` ways traversable by the requested mode are included
//! (see [`mode_speed_mps`]).  All other features (buildings, POIs,
//! relations) are ignored.  One-way restrictions apply to `Drive` and
//! `Bike`; pedestrians traverse every kept way in both directions.
//!
//! # Memory note
//!
//! The loader buffers all OSM nodes in a `HashMap<i64, GeoPoint>` for the
//! first pass (needed because ways reference node IDs by OSM integer ID).
//! The map is freed before the R-tree is built.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use osmpbf::{Element, ElementReader};

use tl_core::{GeoPoint, NodeId, TravelMode};

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::provider::GraphProvider;
use crate::{SpatialError, SpatialResult};

// ── Public entry point ────────────────────────────────────────────────────────

/// Load a road network for `mode` from an OSM PBF file.
///
/// Use [`RoadNetworkBuilder`] directly for non-OSM sources.
///
/// # Errors
///
/// Returns [`SpatialError::Osm`] on parse errors,
/// [`SpatialError::Io`] on file errors.
pub fn load_from_pbf(path: &Path, mode: TravelMode) -> SpatialResult<RoadNetwork> {
    // ── Phase 1: collect all OSM nodes + relevant ways in one pass ────────
    let reader =
        ElementReader::from_path(path).map_err(|e| SpatialError::Osm(e.to_string()))?;

    let mut all_nodes: HashMap<i64, GeoPoint> = HashMap::new();
    let mut kept_ways: Vec<OsmWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::DenseNode(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let highway = tags
                    .iter()
                    .find(|(k, _)| *k == "highway")
                    .map(|(_, v)| *v);

                if let Some(speed_mps) = highway.and_then(|h| mode_speed_mps(mode, h)) {
                    let oneway = mode != TravelMode::Walk
                        && is_oneway(highway.unwrap_or(""), &tags);
                    let refs: Vec<i64> = w.refs().collect();
                    kept_ways.push(OsmWay { refs, speed_mps, oneway });
                }
            }
            _ => {}
        })
        .map_err(|e| SpatialError::Osm(e.to_string()))?;

    log::info!(
        "OSM extract {}: {} nodes scanned, {} {} ways kept",
        path.display(),
        all_nodes.len(),
        kept_ways.len(),
        mode
    );

    // ── Phase 2: identify road-referenced node IDs ────────────────────────
    let road_node_ids: HashSet<i64> = kept_ways
        .iter()
        .flat_map(|w| w.refs.iter().copied())
        .collect();

    // ── Phase 3: build network ────────────────────────────────────────────
    // Pre-allocate: ~2× road nodes for edges (rough estimate).
    let mut builder =
        RoadNetworkBuilder::with_capacity(road_node_ids.len(), road_node_ids.len() * 2);

    // Map OSM node IDs → our NodeIds, adding only road-relevant nodes.
    let mut osm_to_tl: HashMap<i64, NodeId> = HashMap::with_capacity(road_node_ids.len());

    for osm_id in &road_node_ids {
        if let Some(&pos) = all_nodes.get(osm_id) {
            let tl_id = builder.add_node(pos);
            osm_to_tl.insert(*osm_id, tl_id);
        }
    }

    // Free the full node map — no longer needed.
    drop(all_nodes);
    drop(road_node_ids);

    // Add directed edges from way node sequences.
    for way in &kept_ways {
        for window in way.refs.windows(2) {
            let (osm_a, osm_b) = (window[0], window[1]);
            if let (Some(&from), Some(&to)) = (osm_to_tl.get(&osm_a), osm_to_tl.get(&osm_b)) {
                let len_m = builder.node_pos(from).distance_m(builder.node_pos(to));
                let travel_secs = len_m / way.speed_mps;

                builder.add_directed_edge(from, to, len_m, travel_secs);
                if !way.oneway {
                    builder.add_directed_edge(to, from, len_m, travel_secs);
                }
            }
        }
    }

    Ok(builder.build())
}

// ── PbfProvider ───────────────────────────────────────────────────────────────

/// A [`GraphProvider`] backed by pre-downloaded OSM extracts on disk.
///
/// A place name maps to a file in the cache directory by slug:
/// `"Washington, United States"` → `washington-united-states.osm.pbf`.
/// Missing extracts are an immediate [`SpatialError::Provider`] naming the
/// expected path; this crate never fetches from the network.
pub struct PbfProvider {
    cache_dir: PathBuf,
}

impl PbfProvider {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self { cache_dir: cache_dir.into() }
    }

    /// The extract file a place name resolves to.
    pub fn extract_path(&self, place: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.osm.pbf", slugify(place)))
    }
}

impl GraphProvider for PbfProvider {
    fn load(&self, place: &str, mode: TravelMode) -> SpatialResult<RoadNetwork> {
        let path = self.extract_path(place);
        if !path.is_file() {
            return Err(SpatialError::Provider(format!(
                "no extract for {place:?}: expected {}",
                path.display()
            )));
        }
        load_from_pbf(&path, mode)
    }
}

/// Lowercase a place name and replace every non-alphanumeric run with a
/// single dash: `"Washington, United States"` → `"washington-united-states"`.
fn slugify(place: &str) -> String {
    let mut slug = String::with_capacity(place.len());
    let mut last_dash = true; // suppress a leading dash
    for c in place.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

// ── Internal types ────────────────────────────────────────────────────────────

struct OsmWay {
    refs: Vec<i64>,
    speed_mps: f64,
    oneway: bool,
}

// ── Tag helpers ───────────────────────────────────────────────────────────────

/// Return the assumed speed (m/s) for a road class under the given mode, or
/// `None` if the mode cannot traverse this `highway` value.
///
/// Speeds are conservative urban defaults — applications may override by
/// implementing their own loader with OSM `maxspeed` parsing.
pub fn mode_speed_mps(mode: TravelMode, highway: &str) -> Option<f64> {
    match mode {
        TravelMode::Drive => match highway {
            "motorway" | "motorway_link"       => Some(29.1), // ~65 mph
            "trunk" | "trunk_link"             => Some(24.6), // ~55 mph
            "primary" | "primary_link"         => Some(20.1), // ~45 mph
            "secondary" | "secondary_link"     => Some(17.9), // ~40 mph
            "tertiary" | "tertiary_link"       => Some(13.4), // ~30 mph
            "residential" | "living_street"    => Some(8.9),  // ~20 mph
            "service" | "unclassified"         => Some(6.7),  // ~15 mph
            // Explicitly non-car:
            "footway" | "path" | "cycleway"
            | "pedestrian" | "steps" | "track" => None,
            // Unknown road type — assign a cautious default rather than dropping.
            _                                  => Some(8.9),
        },
        TravelMode::Bike => match highway {
            // Flat 4.2 m/s (~15 km/h) on everything a bicycle may use.
            "cycleway" | "residential" | "living_street" | "tertiary"
            | "tertiary_link" | "secondary" | "secondary_link" | "primary"
            | "primary_link" | "service" | "unclassified" | "track"
            | "path"                           => Some(4.2),
            "motorway" | "motorway_link" | "trunk" | "trunk_link"
            | "footway" | "pedestrian" | "steps" => None,
            _                                  => Some(4.2),
        },
        TravelMode::Walk => match highway {
            "motorway" | "motorway_link" | "trunk" | "trunk_link" => None,
            // Everything else is walkable at 1.4 m/s.
            _                                  => Some(1.4),
        },
        // `TravelMode` is `#[non_exhaustive]`; future modes are untraversable
        // until given an explicit arm above.
        _ => None,
    }
}

/// Determine whether a way should be treated as one-way for wheeled traffic.
///
/// Motorways and motorway links are implicitly one-way in OSM convention.
fn is_oneway(highway: &str, tags: &[(&str, &str)]) -> bool {
    let explicit = tags
        .iter()
        .any(|(k, v)| *k == "oneway" && matches!(*v, "yes" | "1" | "true"));
    let implicit = matches!(highway, "motorway" | "motorway_link");
    explicit || implicit
}

#[cfg(test)]
mod tests {
    use tl_core::TravelMode;

    use super::{mode_speed_mps, slugify};

    #[test]
    fn slugs() {
        assert_eq!(slugify("Washington, United States"), "washington-united-states");
        assert_eq!(slugify("  Beijing  "), "beijing");
        assert_eq!(slugify("São Paulo"), "s-o-paulo");
    }

    #[test]
    fn cycleway_is_bike_only() {
        assert!(mode_speed_mps(TravelMode::Bike, "cycleway").is_some());
        assert!(mode_speed_mps(TravelMode::Drive, "cycleway").is_none());
        assert!(mode_speed_mps(TravelMode::Walk, "cycleway").is_some());
    }

    #[test]
    fn motorway_is_drive_only() {
        assert!(mode_speed_mps(TravelMode::Drive, "motorway").is_some());
        assert!(mode_speed_mps(TravelMode::Bike, "motorway").is_none());
        assert!(mode_speed_mps(TravelMode::Walk, "motorway").is_none());
    }
}
