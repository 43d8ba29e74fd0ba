//! Data models
//!
//! Reference data handed to the seating chart by the surrounding
//! application: seats, reservations and the closed set of zones.

pub mod reservation;
pub mod seat;
pub mod zone;

// Re-exports
pub use reservation::*;
pub use seat::*;
pub use zone::*;
