//! Seat catalog - indexed, immutable view over the loaded seats

use crate::core::{ChartError, Result, SeatKey};
use shared::models::{Seat, ZoneId};
use std::collections::HashMap;

/// All seats of a session, indexed by id and by `(zone, number)`
///
/// Construction rejects duplicate ids, duplicate in-zone numbers and
/// seat number 0, so every lookup below has at most one answer.
#[derive(Debug, Clone, Default)]
pub struct SeatCatalog {
    seats: Vec<Seat>,
    by_id: HashMap<String, usize>,
    by_number: HashMap<(ZoneId, u32), usize>,
}

impl SeatCatalog {
    pub fn new(seats: Vec<Seat>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(seats.len());
        let mut by_number = HashMap::with_capacity(seats.len());

        for (idx, seat) in seats.iter().enumerate() {
            if seat.number == 0 {
                return Err(ChartError::InvalidSeatNumber(seat.id.clone()));
            }
            if by_id.insert(seat.id.clone(), idx).is_some() {
                return Err(ChartError::DuplicateSeat(SeatKey::Id(seat.id.clone())));
            }
            if by_number.insert((seat.zone, seat.number), idx).is_some() {
                return Err(ChartError::DuplicateSeat(SeatKey::Number {
                    zone: seat.zone,
                    number: seat.number,
                }));
            }
        }

        Ok(Self {
            seats,
            by_id,
            by_number,
        })
    }

    pub fn get(&self, seat_id: &str) -> Option<&Seat> {
        self.by_id.get(seat_id).map(|&idx| &self.seats[idx])
    }

    /// Like [`get`](Self::get), but a missing seat is an error
    pub fn require(&self, seat_id: &str) -> Result<&Seat> {
        self.get(seat_id)
            .ok_or_else(|| ChartError::unknown_seat(seat_id))
    }

    pub fn by_number(&self, zone: ZoneId, number: u32) -> Option<&Seat> {
        self.by_number.get(&(zone, number)).map(|&idx| &self.seats[idx])
    }

    /// Seats of one zone, ascending by number
    pub fn in_zone(&self, zone: ZoneId) -> Vec<&Seat> {
        let mut seats: Vec<&Seat> = self.seats.iter().filter(|s| s.zone == zone).collect();
        seats.sort_by_key(|s| s.number);
        seats
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}
