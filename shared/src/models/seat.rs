//! Seat Model

use super::ZoneId;
use serde::{Deserialize, Serialize};

/// Seat entity (좌석)
///
/// Reference data: loaded once per session and never mutated by the chart.
/// `number` is unique within a zone and drives the slot mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    #[serde(alias = "group")]
    pub zone: ZoneId,
    pub grade: u8,
    pub number: u32,
}

impl Seat {
    pub fn new(id: impl Into<String>, zone: ZoneId, grade: u8, number: u32) -> Self {
        Self {
            id: id.into(),
            zone,
            grade,
            number,
        }
    }

    /// Seat with the conventional `"<zone>-<number>"` id
    pub fn numbered(zone: ZoneId, grade: u8, number: u32) -> Self {
        Self::new(format!("{}-{}", zone, number), zone, grade, number)
    }
}
