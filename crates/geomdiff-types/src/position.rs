use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Fixed-point scale: one unit is 1e-7 degrees.
const SCALE: f64 = 10_000_000.0;

/// The coordinate of a node.
///
/// Stored as fixed-point latitude/longitude in units of 1e-7 degrees, so two
/// positions compare equal exactly when they would be stored identically.
/// On the wire a position is a `{"lat": .., "lon": ..}` object in degrees.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Degrees", into = "Degrees")]
pub struct Position {
    lat: i32,
    lon: i32,
}

impl Position {
    /// Create a position from raw fixed-point units.
    pub const fn from_fixed(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }

    /// Create a position from degrees, rounding to the nearest 1e-7 degree.
    pub fn from_degrees(lat: f64, lon: f64) -> Result<Self, TypeError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(TypeError::CoordinateOutOfRange {
                axis: "lat",
                value: lat,
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(TypeError::CoordinateOutOfRange {
                axis: "lon",
                value: lon,
            });
        }
        // Both products are bounded by 1.8e9, inside i32.
        Ok(Self {
            lat: (lat * SCALE).round() as i32,
            lon: (lon * SCALE).round() as i32,
        })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        f64::from(self.lat) / SCALE
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        f64::from(self.lon) / SCALE
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({self})")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7},{:.7}", self.lat(), self.lon())
    }
}

/// Wire form of a [`Position`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct Degrees {
    lat: f64,
    lon: f64,
}

impl TryFrom<Degrees> for Position {
    type Error = TypeError;

    fn try_from(d: Degrees) -> Result<Self, Self::Error> {
        Self::from_degrees(d.lat, d.lon)
    }
}

impl From<Position> for Degrees {
    fn from(p: Position) -> Self {
        Self {
            lat: p.lat(),
            lon: p.lon(),
        }
    }
}
