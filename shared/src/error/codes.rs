//! Unified error codes for the seating chart
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Zone / layout errors
//! - 2xxx: Seat errors
//! - 3xxx: Reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// Serialized as a bare `u16` so any front end can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    Success = 0,
    ValidationFailed = 2,
    NotFound = 3,

    // ==================== 1xxx: Zone / Layout ====================
    /// Zone id is not registered
    ZoneNotFound = 1001,
    /// Zone already has a layout definition
    ZoneAlreadyRegistered = 1002,
    /// Layout definition disagrees with the seat catalog
    LayoutInconsistent = 1101,

    // ==================== 2xxx: Seat ====================
    SeatNotFound = 2001,
    /// Seat id or zone number appears twice in the catalog
    SeatDuplicated = 2002,

    // ==================== 3xxx: Reservation ====================
    ReservationStatusInvalid = 3001,
    ReservationDateInvalid = 3002,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    /// Snapshot file could not be read or parsed
    SnapshotLoadFailed = 9002,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 12] = [
        ErrorCode::Success,
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::ZoneNotFound,
        ErrorCode::ZoneAlreadyRegistered,
        ErrorCode::LayoutInconsistent,
        ErrorCode::SeatNotFound,
        ErrorCode::SeatDuplicated,
        ErrorCode::ReservationStatusInvalid,
        ErrorCode::ReservationDateInvalid,
        ErrorCode::InternalError,
        ErrorCode::SnapshotLoadFailed,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default English message, used when no custom message is given
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "OK",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::ZoneNotFound => "Zone not found",
            ErrorCode::ZoneAlreadyRegistered => "Zone layout already registered",
            ErrorCode::LayoutInconsistent => "Zone layout does not match the seat catalog",
            ErrorCode::SeatNotFound => "Seat not found",
            ErrorCode::SeatDuplicated => "Seat appears more than once in the catalog",
            ErrorCode::ReservationStatusInvalid => "Invalid reservation status",
            ErrorCode::ReservationDateInvalid => "Invalid reservation date",
            ErrorCode::InternalError => "Internal error",
            ErrorCode::SnapshotLoadFailed => "Failed to load snapshot",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number outside the code table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
