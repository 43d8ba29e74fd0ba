//! Zone Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Zone identifier (구역: one physical seating area per grade)
///
/// The set is closed; ordering follows the order zones are drawn on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneId {
    A,
    B,
    C,
    D,
}

impl ZoneId {
    /// All zones in chart order
    pub const ALL: [ZoneId; 4] = [ZoneId::A, ZoneId::B, ZoneId::C, ZoneId::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneId::A => "A",
            ZoneId::B => "B",
            ZoneId::C => "C",
            ZoneId::D => "D",
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zone id string outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown zone: {0}")]
pub struct ParseZoneError(pub String);

impl FromStr for ZoneId {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(ZoneId::A),
            "B" | "b" => Ok(ZoneId::B),
            "C" | "c" => Ok(ZoneId::C),
            "D" | "d" => Ok(ZoneId::D),
            other => Err(ParseZoneError(other.to_string())),
        }
    }
}
