//! Occupancy Resolver
//!
//! Resolves a seat's display status, selectability and color key from a
//! reservation snapshot for one date. Everything here is a pure function of
//! `(catalog, reservations, date, mode, selection)`.

use crate::catalog::SeatCatalog;
use crate::core::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{Reservation, ReservationStatus, Seat};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display status of a seat on a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Empty,
    Reserved,
    CheckedIn,
    NoShow,
}

impl Status {
    /// Map a stored reservation status; a checked-out seat displays as empty
    pub fn from_reservation(status: ReservationStatus) -> Self {
        match status {
            ReservationStatus::Reserved => Status::Reserved,
            ReservationStatus::CheckedIn => Status::CheckedIn,
            ReservationStatus::NoShow => Status::NoShow,
            ReservationStatus::CheckedOut => Status::Empty,
        }
    }

    /// View-mode color key
    pub fn color_key(&self) -> ColorKey {
        match self {
            Status::Empty => ColorKey::None,
            Status::Reserved => ColorKey::Reserved,
            Status::CheckedIn => ColorKey::CheckedIn,
            Status::NoShow => ColorKey::NoShow,
        }
    }
}

/// Abstract visual treatment; mapping to concrete styling is the renderer's job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorKey {
    // view mode
    None,
    Reserved,
    CheckedIn,
    NoShow,
    // select mode
    Selected,
    Blocked,
    Available,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Read-only chart; nothing is selectable
    #[default]
    View,
    /// The viewer is picking a seat
    Select,
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionMode::View => f.write_str("view"),
            InteractionMode::Select => f.write_str("select"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interaction mode: {0} (expected view or select)")]
pub struct ParseModeError(pub String);

impl FromStr for InteractionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "view" => Ok(InteractionMode::View),
            "select" => Ok(InteractionMode::Select),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// One row of the static legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub status: Status,
    pub color: ColorKey,
}

/// The fixed `Status -> ColorKey` table, in legend display order
pub fn legend() -> [LegendEntry; 4] {
    [Status::CheckedIn, Status::Reserved, Status::NoShow, Status::Empty].map(|status| {
        LegendEntry {
            status,
            color: status.color_key(),
        }
    })
}

/// Everything a renderer needs to know about one seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatState {
    pub status: Status,
    pub selectable: bool,
    pub selected: bool,
    pub color: ColorKey,
}

/// Borrowed view of one render pass: seat catalog, reservation snapshot, date
///
/// The snapshot may hold reservations for any number of dates; lookups
/// filter by `date` and seat id.
#[derive(Debug, Clone, Copy)]
pub struct OccupancyResolver<'a> {
    catalog: &'a SeatCatalog,
    reservations: &'a [Reservation],
    date: NaiveDate,
}

impl<'a> OccupancyResolver<'a> {
    pub fn new(catalog: &'a SeatCatalog, reservations: &'a [Reservation], date: NaiveDate) -> Self {
        Self {
            catalog,
            reservations,
            date,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Display status of `seat_id` on the resolver's date
    pub fn status_of(&self, seat_id: &str) -> Result<Status> {
        let seat = self.catalog.require(seat_id)?;
        Ok(self.status(seat))
    }

    /// Whether `seat_id` may be picked in `mode`
    ///
    /// Never in view mode. In select mode a seat is free unless some
    /// reservation for the date still holds it; a checked-out seat reopens.
    pub fn is_selectable(&self, seat_id: &str, mode: InteractionMode) -> Result<bool> {
        let seat = self.catalog.require(seat_id)?;
        Ok(self.selectable(seat, mode))
    }

    pub fn color_key(
        &self,
        seat_id: &str,
        mode: InteractionMode,
        selected_seat_id: Option<&str>,
    ) -> Result<ColorKey> {
        let seat = self.catalog.require(seat_id)?;
        Ok(self.resolve(seat, mode, selected_seat_id).color)
    }

    /// Full state of an already-resolved catalog seat
    pub fn resolve(
        &self,
        seat: &Seat,
        mode: InteractionMode,
        selected_seat_id: Option<&str>,
    ) -> SeatState {
        let status = self.status(seat);
        let selectable = self.selectable(seat, mode);
        let selected = selected_seat_id == Some(seat.id.as_str());

        let color = match mode {
            InteractionMode::View => status.color_key(),
            InteractionMode::Select if selected => ColorKey::Selected,
            InteractionMode::Select if self.is_held(seat) => ColorKey::Blocked,
            InteractionMode::Select => ColorKey::Available,
        };

        SeatState {
            status,
            selectable,
            selected,
            color,
        }
    }

    /// The reservation deciding the seat's status: the first record for the
    /// seat on this date, in snapshot order.
    pub fn reservation_for(&self, seat: &Seat) -> Option<&'a Reservation> {
        self.reservations
            .iter()
            .find(|r| r.is_for(&seat.id, self.date))
    }

    fn status(&self, seat: &Seat) -> Status {
        self.reservation_for(seat)
            .map(|r| Status::from_reservation(r.status))
            .unwrap_or(Status::Empty)
    }

    fn is_held(&self, seat: &Seat) -> bool {
        self.reservations
            .iter()
            .any(|r| r.is_for(&seat.id, self.date) && r.status.holds_seat())
    }

    fn selectable(&self, seat: &Seat, mode: InteractionMode) -> bool {
        match mode {
            InteractionMode::View => false,
            InteractionMode::Select => !self.is_held(seat),
        }
    }
}
