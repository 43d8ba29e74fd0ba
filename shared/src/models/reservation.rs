//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored reservation status
///
/// Serialized kebab-case. The Korean literals written by the legacy front end
/// are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    /// 예약
    #[serde(alias = "예약")]
    Reserved,
    /// 입실완료
    #[serde(alias = "입실완료")]
    CheckedIn,
    /// 미입실
    #[serde(alias = "미입실")]
    NoShow,
    /// 퇴실완료 - the seat has been vacated for the day
    #[serde(alias = "퇴실완료")]
    CheckedOut,
}

impl ReservationStatus {
    /// Whether the reservation still holds its seat
    pub fn holds_seat(&self) -> bool {
        !matches!(self, ReservationStatus::CheckedOut)
    }
}

/// Reservation record (예약)
///
/// Supplied externally per render pass; at most one per seat per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub seat_id: String,
    pub date: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn new(seat_id: impl Into<String>, date: NaiveDate, status: ReservationStatus) -> Self {
        Self {
            seat_id: seat_id.into(),
            date,
            status,
        }
    }

    pub fn is_for(&self, seat_id: &str, date: NaiveDate) -> bool {
        self.seat_id == seat_id && self.date == date
    }
}
