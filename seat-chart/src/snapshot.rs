//! Snapshot loading
//!
//! A snapshot is the JSON hand-off from the seat and reservation providers:
//!
//! ```json
//! {
//!   "seats": [{ "id": "B-1", "zone": "B", "grade": 2, "number": 1 }],
//!   "reservations": [{ "seat_id": "B-1", "date": "2024-05-01", "status": "reserved" }]
//! }
//! ```
//!
//! `seats` may be omitted, in which case the standard catalog is used.

use crate::catalog::SeatCatalog;
use crate::core::{ChartError, Result};
use crate::layout::standard_seats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{Reservation, Seat};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<Vec<Seat>>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl Snapshot {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ChartError::SnapshotIo {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::parse(&raw, path)?;

        info!(
            path = %path.display(),
            seats = snapshot.seats.as_ref().map(Vec::len),
            reservations = snapshot.reservations.len(),
            "Snapshot loaded"
        );
        for (seat_id, date) in snapshot.double_bookings() {
            warn!(seat_id, date = %date, "More than one reservation for a seat on one date");
        }
        Ok(snapshot)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| ChartError::SnapshotParse {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Seat catalog from the snapshot, or the standard one when absent
    pub fn catalog(&self) -> Result<SeatCatalog> {
        match &self.seats {
            Some(seats) => SeatCatalog::new(seats.clone()),
            None => SeatCatalog::new(standard_seats()),
        }
    }

    /// `(seat_id, date)` pairs carrying more than one reservation, sorted
    ///
    /// Providers promise at most one; the resolver does not enforce it.
    pub fn double_bookings(&self) -> Vec<(&str, NaiveDate)> {
        let mut counts: HashMap<(&str, NaiveDate), usize> = HashMap::new();
        for r in &self.reservations {
            *counts.entry((r.seat_id.as_str(), r.date)).or_default() += 1;
        }
        let mut doubled: Vec<(&str, NaiveDate)> = counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(key, _)| key)
            .collect();
        doubled.sort();
        doubled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ReservationStatus, ZoneId};

    #[test]
    fn test_parse_without_seats_uses_standard_catalog() {
        let snapshot = Snapshot::parse(
            r#"{"reservations":[{"seat_id":"D-4","date":"2024-05-01","status":"입실완료"}]}"#,
            Path::new("inline.json"),
        )
        .unwrap();

        assert!(snapshot.seats.is_none());
        assert_eq!(snapshot.reservations[0].status, ReservationStatus::CheckedIn);
        assert_eq!(snapshot.catalog().unwrap().len(), 128);
    }

    #[test]
    fn test_parse_with_seats() {
        let snapshot = Snapshot::parse(
            r#"{"seats":[{"id":"x","group":"C","grade":2,"number":1}]}"#,
            Path::new("inline.json"),
        )
        .unwrap();
        let catalog = snapshot.catalog().unwrap();
        assert_eq!(catalog.get("x").unwrap().zone, ZoneId::C);
        assert!(snapshot.reservations.is_empty());
    }

    #[test]
    fn test_parse_error_carries_path() {
        let err = Snapshot::parse("{not json", Path::new("broken.json")).unwrap_err();
        match err {
            ChartError::SnapshotParse { path, .. } => assert_eq!(path, PathBuf::from("broken.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_date_rejected() {
        let result = Snapshot::parse(
            r#"{"reservations":[{"seat_id":"B-1","date":"2024-13-01","status":"reserved"}]}"#,
            Path::new("inline.json"),
        );
        assert!(matches!(result, Err(ChartError::SnapshotParse { .. })));
    }

    #[test]
    fn test_double_bookings() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let snapshot = Snapshot {
            seats: None,
            reservations: vec![
                Reservation::new("B-1", date, ReservationStatus::Reserved),
                Reservation::new("B-1", date, ReservationStatus::CheckedOut),
                Reservation::new("B-1", date.succ_opt().unwrap(), ReservationStatus::Reserved),
                Reservation::new("B-2", date, ReservationStatus::Reserved),
            ],
        };
        assert_eq!(snapshot.double_bookings(), vec![("B-1", date)]);
    }
}
