//! Query Facade and its text rendering

pub mod facade;
pub mod text;

pub use facade::{
    ChartView, RenderRequest, RenderSlot, SeatChart, SeatSlot, SectionView, ZoneSummary, ZoneView,
};
