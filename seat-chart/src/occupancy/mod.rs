//! Occupancy resolution

pub mod resolver;

pub use resolver::{
    ColorKey, InteractionMode, LegendEntry, OccupancyResolver, ParseModeError, SeatState, Status,
    legend,
};
