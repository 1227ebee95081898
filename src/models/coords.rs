use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair as produced by a map click.
///
/// Serialized as `[lat, lng]`, the same shape map widgets use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        let c = Self { lat, lng };
        if !c.is_finite() {
            return Err(AppError::InvalidCoordinates(format!("({}, {})", lat, lng)));
        }
        Ok(c)
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<[f64; 2]> for Coords {
    fn from(v: [f64; 2]) -> Self {
        Self {
            lat: v[0],
            lng: v[1],
        }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}
