//! Travel mode enum shared by the graph provider and the routing layer.
//!
//! The mode selects which road classes a network contains (a cycleway is a
//! road for `Bike` but not for `Drive`), mirroring the `network_type`
//! parameter of the upstream map-data provider.

use std::str::FromStr;

use crate::TlError;

/// The travel mode a road network is built for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum TravelMode {
    /// Motor vehicle.
    Drive,
    /// Bicycle (the default for bike-trip analysis).
    #[default]
    Bike,
    /// On foot.
    Walk,
}

impl TravelMode {
    /// Human-readable label, useful for CLI arguments and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Drive => "drive",
            TravelMode::Bike  => "bike",
            TravelMode::Walk  => "walk",
        }
    }
}

impl FromStr for TravelMode {
    type Err = TlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drive" => Ok(TravelMode::Drive),
            "bike"  => Ok(TravelMode::Bike),
            "walk"  => Ok(TravelMode::Walk),
            other => Err(TlError::Config(format!(
                "unknown travel mode {other:?}: expected \"drive\", \"bike\", or \"walk\""
            ))),
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
