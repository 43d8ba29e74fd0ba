//! Zone layout definitions
//!
//! A zone's physical arrangement is declared once as an ordered list of
//! typed slots, grouped into sections that carry a column count. Gaps are
//! declared, never computed from loop indices.

use serde::Serialize;
use shared::models::ZoneId;
use std::ops::{Range, RangeInclusive};

/// One position in a zone's rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Reference to a seat by its in-zone number
    Seat(u32),
    /// Placeholder keeping the grid aligned (aisle, table gap, ragged row)
    Gap,
}

impl Slot {
    pub fn seat_number(&self) -> Option<u32> {
        match self {
            Slot::Seat(n) => Some(*n),
            Slot::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Slot::Gap)
    }
}

/// A run of slots drawn as one grid block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSection {
    pub name: String,
    /// Grid width; slots fill it row-major
    pub columns: u16,
    range: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLayoutDefinition {
    zone: ZoneId,
    grade: u8,
    slots: Vec<Slot>,
    sections: Vec<LayoutSection>,
}

impl ZoneLayoutDefinition {
    pub fn builder(zone: ZoneId, grade: u8) -> LayoutBuilder {
        LayoutBuilder {
            zone,
            grade,
            slots: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Single-section layout from a flat slot list
    pub fn flat(zone: ZoneId, grade: u8, columns: u16, slots: Vec<Slot>) -> Self {
        let mut builder = Self::builder(zone, grade);
        builder.push_section("grid", columns, slots);
        builder.build()
    }

    pub fn zone(&self) -> ZoneId {
        self.zone
    }

    /// The only grade allowed to see this zone
    pub fn grade(&self) -> u8 {
        self.grade
    }

    /// All slots in rendering order (sections concatenated)
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn sections(&self) -> impl Iterator<Item = (&LayoutSection, &[Slot])> {
        self.sections
            .iter()
            .map(|section| (section, &self.slots[section.range.clone()]))
    }

    pub fn seat_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_gap()).count()
    }

    pub fn gap_count(&self) -> usize {
        self.slots.len() - self.seat_count()
    }

    pub fn is_visible_to(&self, grade: u8) -> bool {
        self.grade == grade
    }
}

pub struct LayoutBuilder {
    zone: ZoneId,
    grade: u8,
    slots: Vec<Slot>,
    sections: Vec<LayoutSection>,
}

impl LayoutBuilder {
    /// Append a section whose slots are filled in by `fill`
    pub fn section(
        mut self,
        name: impl Into<String>,
        columns: u16,
        fill: impl FnOnce(&mut SectionSlots) -> &mut SectionSlots,
    ) -> Self {
        let mut run = SectionSlots::default();
        fill(&mut run);
        self.push_section(name, columns, run.slots);
        self
    }

    fn push_section(&mut self, name: impl Into<String>, columns: u16, slots: Vec<Slot>) {
        let start = self.slots.len();
        self.slots.extend(slots);
        self.sections.push(LayoutSection {
            name: name.into(),
            columns: columns.max(1),
            range: start..self.slots.len(),
        });
    }

    pub fn build(self) -> ZoneLayoutDefinition {
        ZoneLayoutDefinition {
            zone: self.zone,
            grade: self.grade,
            slots: self.slots,
            sections: self.sections,
        }
    }
}

/// Slot accumulator handed to [`LayoutBuilder::section`]
#[derive(Debug, Default)]
pub struct SectionSlots {
    slots: Vec<Slot>,
}

impl SectionSlots {
    pub fn seat(&mut self, number: u32) -> &mut Self {
        self.slots.push(Slot::Seat(number));
        self
    }

    pub fn seats(&mut self, numbers: RangeInclusive<u32>) -> &mut Self {
        self.slots.extend(numbers.map(Slot::Seat));
        self
    }

    pub fn gap(&mut self) -> &mut Self {
        self.slots.push(Slot::Gap);
        self
    }
}
