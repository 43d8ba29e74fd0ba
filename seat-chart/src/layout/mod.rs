//! Zone Layout Registry
//!
//! - [`definition`] - slots, sections and the layout builder
//! - [`registry`] - per-zone lookup and catalog validation
//! - [`standard`] - the built-in A-D floor plan

pub mod definition;
pub mod registry;
pub mod standard;

pub use definition::{LayoutBuilder, LayoutSection, SectionSlots, Slot, ZoneLayoutDefinition};
pub use registry::LayoutRegistry;
pub use standard::{standard_catalog, standard_layouts, standard_registry, standard_seats};
