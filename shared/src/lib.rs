//! Shared types for the study-room seating chart
//!
//! Reference-data models (seats, reservations, zones) and the unified
//! error-code system used across crates.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{ParseZoneError, Reservation, ReservationStatus, Seat, ZoneId};
