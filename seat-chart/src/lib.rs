//! Seat Chart - seating chart layout & occupancy resolution
//!
//! # Overview
//!
//! Answers, for one zone of the study room and one viewer grade, "what does
//! each seat look like right now, and can it be picked":
//!
//! - **Zone Layout Registry** (`layout`): per-zone slot sequences (seats and
//!   gaps) plus the grade allowed to see them, validated against the seat
//!   catalog at startup
//! - **Occupancy Resolver** (`occupancy`): status, selectability and color
//!   key of a seat from a reservation snapshot
//! - **Query Facade** (`chart`): composes the two into render slots
//!
//! # Module layout
//!
//! ```text
//! seat-chart/src/
//! ├── core/        # config, errors
//! ├── catalog.rs   # indexed seat catalog
//! ├── layout/      # slots, registry, built-in floor plan
//! ├── occupancy/   # resolver, status, color keys, legend
//! ├── chart/       # facade, text rendering
//! ├── snapshot.rs  # JSON snapshot loading
//! └── utils/       # logging
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use seat_chart::{RenderRequest, SeatChart};
//! use shared::models::{Reservation, ReservationStatus, ZoneId};
//!
//! let chart = SeatChart::standard().unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! let reservations = vec![Reservation::new("B-2", date, ReservationStatus::CheckedIn)];
//!
//! let slots = chart
//!     .render_slots(ZoneId::B, 2, &RenderRequest::view(&reservations, date))
//!     .unwrap();
//! assert_eq!(slots.len(), 40);
//! ```

pub mod catalog;
pub mod chart;
pub mod core;
pub mod layout;
pub mod occupancy;
pub mod snapshot;
pub mod utils;

// Re-exports
pub use catalog::SeatCatalog;
pub use chart::{ChartView, RenderRequest, RenderSlot, SeatChart, SeatSlot, ZoneSummary, ZoneView};
pub use core::{ChartError, Config, LayoutIssue, Result, SeatKey};
pub use layout::{LayoutRegistry, Slot, ZoneLayoutDefinition};
pub use occupancy::{ColorKey, InteractionMode, OccupancyResolver, Status, legend};
pub use snapshot::Snapshot;
pub use utils::logger::init_logger_with_file;
