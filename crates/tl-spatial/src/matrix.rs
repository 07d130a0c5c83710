//! Pairwise shortest-length matrix over a depot list.
//!
//! The matrix is symmetric with a zero diagonal.  An unreachable pair is
//! recorded as the [`NO_PATH`] sentinel and does **not** abort the batch:
//! one disconnected depot must not cost the rest of the matrix.

use std::fmt;

use tl_core::{GeoPoint, NodeId};

use crate::router::{ShortestPaths, Weight};
use crate::{SpatialError, SpatialResult};

/// Sentinel stored for a depot pair with no connecting path.
///
/// Distinct from any real distance (all real entries are ≥ 0) and excluded
/// from [`DepotMatrix::min_positive`] / [`DepotMatrix::max_positive`].
pub const NO_PATH: f64 = -1.0;

/// A k×k symmetric matrix of shortest-path lengths between depots.
#[derive(Debug, Clone, PartialEq)]
pub struct DepotMatrix {
    size: usize,
    /// Row-major cells; `cells[i * size + j]` is the length from depot `i`
    /// to depot `j`.
    cells: Vec<f64>,
    /// The graph node each depot snapped to, index-aligned with the depot
    /// list the matrix was built from.
    snapped: Vec<NodeId>,
}

impl DepotMatrix {
    /// Build the matrix for `depots` over `engine`.
    ///
    /// Each depot is snapped to its nearest graph node first; every
    /// unordered pair is then queried once and stored symmetrically.
    ///
    /// # Errors
    ///
    /// [`SpatialError::EmptyNetwork`] if snapping fails (no graph nodes).
    /// Unreachable pairs are not errors; they store [`NO_PATH`].
    pub fn build<E: ShortestPaths>(
        engine: &E,
        depots: &[GeoPoint],
        weight: Weight,
    ) -> SpatialResult<Self> {
        let snapped: Vec<NodeId> = depots
            .iter()
            .map(|&d| engine.nearest_node(d).ok_or(SpatialError::EmptyNetwork))
            .collect::<SpatialResult<_>>()?;

        let k = depots.len();
        let mut cells = vec![0.0; k * k];

        for i in 0..k {
            for j in (i + 1)..k {
                let length = engine
                    .path_length(snapped[i], snapped[j], weight)
                    .unwrap_or(NO_PATH);
                if length == NO_PATH {
                    log::warn!("no path between depot {} and depot {}", i + 1, j + 1);
                }
                cells[i * k + j] = length;
                cells[j * k + i] = length;
            }
        }

        Ok(Self { size: k, cells, snapped })
    }

    /// Matrix dimension k (number of depots).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value: shortest length from depot `i` to depot `j`, 0 on the
    /// diagonal, [`NO_PATH`] for unreachable pairs.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.size + j]
    }

    /// The graph node depot `i` snapped to.
    pub fn snapped_node(&self, i: usize) -> NodeId {
        self.snapped[i]
    }

    /// Smallest strictly positive entry.  Diagonal zeros and the no-path
    /// sentinel are excluded.  `None` if no positive entry exists.
    pub fn min_positive(&self) -> Option<f64> {
        self.positive_entries().reduce(f64::min)
    }

    /// Largest strictly positive entry, with the same exclusions.
    pub fn max_positive(&self) -> Option<f64> {
        self.positive_entries().reduce(f64::max)
    }

    fn positive_entries(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().copied().filter(|&v| v > 0.0)
    }
}

impl fmt::Display for DepotMatrix {
    /// One line per ordered pair, 1-based, matching the summary table the
    /// CLI prints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            for j in 0..self.size {
                writeln!(
                    f,
                    "Distance between {} and {} is: {}",
                    i + 1,
                    j + 1,
                    self.get(i, j)
                )?;
            }
        }
        Ok(())
    }
}
