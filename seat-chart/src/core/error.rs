//! Chart errors
//!
//! Every failure is terminal for the call that produced it. Layout
//! inconsistencies are raised at startup by registry validation and never
//! reach a render path; unknown zones and seats during rendering are
//! data-sync bugs upstream and propagate unchanged.

use shared::error::{AppError, ErrorCode};
use shared::models::{ParseZoneError, ZoneId};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// How a seat was looked up when it could not be found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatKey {
    /// By opaque seat id
    Id(String),
    /// By in-zone seat number (a layout slot reference)
    Number { zone: ZoneId, number: u32 },
}

impl fmt::Display for SeatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatKey::Id(id) => write!(f, "{}", id),
            SeatKey::Number { zone, number } => write!(f, "zone {} #{}", zone, number),
        }
    }
}

/// A mismatch between a zone's layout definition and the seat catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutIssue {
    /// A slot references a seat number the catalog does not have
    MissingSeat(u32),
    /// The slot list references the same seat number more than once
    DuplicateReference(u32),
    /// A catalog seat of this zone and grade is not covered by any slot
    OrphanedSeat(u32),
    /// A catalog seat sits in this zone but carries another grade
    GradeMismatch { number: u32, grade: u8 },
}

impl LayoutIssue {
    pub fn number(&self) -> u32 {
        match *self {
            LayoutIssue::MissingSeat(n)
            | LayoutIssue::DuplicateReference(n)
            | LayoutIssue::OrphanedSeat(n) => n,
            LayoutIssue::GradeMismatch { number, .. } => number,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            LayoutIssue::MissingSeat(_) => "missing_seat",
            LayoutIssue::DuplicateReference(_) => "duplicate_reference",
            LayoutIssue::OrphanedSeat(_) => "orphaned_seat",
            LayoutIssue::GradeMismatch { .. } => "grade_mismatch",
        }
    }
}

impl fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutIssue::MissingSeat(n) => write!(f, "slot references missing seat #{}", n),
            LayoutIssue::DuplicateReference(n) => write!(f, "seat #{} referenced twice", n),
            LayoutIssue::OrphanedSeat(n) => write!(f, "seat #{} is not covered by any slot", n),
            LayoutIssue::GradeMismatch { number, grade } => {
                write!(f, "seat #{} belongs to grade {}", number, grade)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown zone: {0}")]
    UnknownZone(String),

    #[error("unknown seat: {0}")]
    UnknownSeat(SeatKey),

    #[error("layout of zone {zone} is inconsistent: {detail}")]
    LayoutInconsistency { zone: ZoneId, detail: LayoutIssue },

    #[error("zone {0} already has a layout")]
    DuplicateZone(ZoneId),

    #[error("seat {0} appears more than once in the catalog")]
    DuplicateSeat(SeatKey),

    #[error("seat {0} has number 0; seat numbers start at 1")]
    InvalidSeatNumber(String),

    #[error("failed to read snapshot {path}: {source}")]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {path}: {source}")]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;

impl ChartError {
    pub fn unknown_seat(id: impl Into<String>) -> Self {
        Self::UnknownSeat(SeatKey::Id(id.into()))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ChartError::UnknownZone(_) => ErrorCode::ZoneNotFound,
            ChartError::UnknownSeat(_) => ErrorCode::SeatNotFound,
            ChartError::LayoutInconsistency { .. } => ErrorCode::LayoutInconsistent,
            ChartError::DuplicateZone(_) => ErrorCode::ZoneAlreadyRegistered,
            ChartError::DuplicateSeat(_) => ErrorCode::SeatDuplicated,
            ChartError::InvalidSeatNumber(_) => ErrorCode::ValidationFailed,
            ChartError::SnapshotIo { .. } | ChartError::SnapshotParse { .. } => {
                ErrorCode::SnapshotLoadFailed
            }
        }
    }
}

impl From<ParseZoneError> for ChartError {
    fn from(err: ParseZoneError) -> Self {
        ChartError::UnknownZone(err.0)
    }
}

fn with_seat_key(err: AppError, key: &SeatKey) -> AppError {
    match key {
        SeatKey::Id(id) => err.with_detail("seat_id", id.as_str()),
        SeatKey::Number { zone, number } => err
            .with_detail("zone", zone.as_str())
            .with_detail("number", *number),
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        let base = AppError::with_message(err.code(), err.to_string());
        match &err {
            ChartError::UnknownZone(zone) => base.with_detail("zone", zone.as_str()),
            ChartError::UnknownSeat(key) | ChartError::DuplicateSeat(key) => {
                with_seat_key(base, key)
            }
            ChartError::LayoutInconsistency { zone, detail } => base
                .with_detail("zone", zone.as_str())
                .with_detail("issue", detail.kind())
                .with_detail("number", detail.number()),
            ChartError::DuplicateZone(zone) => base.with_detail("zone", zone.as_str()),
            ChartError::InvalidSeatNumber(id) => base.with_detail("seat_id", id.as_str()),
            ChartError::SnapshotIo { path, .. } | ChartError::SnapshotParse { path, .. } => {
                base.with_detail("path", path.display().to_string())
            }
        }
    }
}
