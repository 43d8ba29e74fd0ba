//! The study room's floor plan
//!
//! | Zone | Grade | Seats | Arrangement |
//! |------|-------|-------|-------------|
//! | A | 3 | 31 | one column of 7, then four 3×2 tables paired around a gap column |
//! | B | 2 | 39 | 10-wide grid, last row one short |
//! | C | 2 | 26 | 7-wide grid, last row gapped at both ends |
//! | D | 2 | 32 | three 2×2 pods + a 3×2 table, then a bench of 8 + a 3×2 table |

use super::definition::ZoneLayoutDefinition;
use super::registry::LayoutRegistry;
use crate::catalog::SeatCatalog;
use crate::core::Result;
use shared::models::{Seat, ZoneId};

pub fn zone_a() -> ZoneLayoutDefinition {
    ZoneLayoutDefinition::builder(ZoneId::A, 3)
        .section("left-column", 1, |s| s.seats(1..=7))
        .section("upper-tables", 7, |s| {
            s.seats(8..=10)
                .gap()
                .seats(14..=16)
                .seats(11..=13)
                .gap()
                .seats(17..=19)
        })
        .section("lower-tables", 7, |s| {
            s.seats(20..=22)
                .gap()
                .seats(26..=28)
                .seats(23..=25)
                .gap()
                .seats(29..=31)
        })
        .build()
}

pub fn zone_b() -> ZoneLayoutDefinition {
    ZoneLayoutDefinition::builder(ZoneId::B, 2)
        .section("grid", 10, |s| s.seats(1..=39).gap())
        .build()
}

pub fn zone_c() -> ZoneLayoutDefinition {
    ZoneLayoutDefinition::builder(ZoneId::C, 2)
        .section("grid", 7, |s| s.seats(1..=21).gap().seats(22..=26).gap())
        .build()
}

pub fn zone_d() -> ZoneLayoutDefinition {
    ZoneLayoutDefinition::builder(ZoneId::D, 2)
        .section("upper-pods", 8, |s| {
            s.seats(1..=2)
                .gap()
                .seats(5..=6)
                .gap()
                .seats(9..=10)
                .seats(3..=4)
                .gap()
                .seats(7..=8)
                .gap()
                .seats(11..=12)
        })
        .section("upper-table", 3, |s| s.seats(13..=18))
        .section("bench", 8, |s| s.seats(19..=26))
        .section("lower-table", 3, |s| s.seats(27..=32))
        .build()
}

/// Zone definitions in chart order
pub fn standard_layouts() -> [ZoneLayoutDefinition; 4] {
    [zone_a(), zone_b(), zone_c(), zone_d()]
}

/// Registry with zones A-D in chart order
pub fn standard_registry() -> Result<LayoutRegistry> {
    standard_layouts()
        .into_iter()
        .try_fold(LayoutRegistry::new(), LayoutRegistry::with)
}

/// Seats matching [`standard_layouts`], ids `"<zone>-<number>"`
pub fn standard_seats() -> Vec<Seat> {
    let mut seats = Vec::new();
    for definition in standard_layouts() {
        let zone = definition.zone();
        let grade = definition.grade();
        let mut numbers: Vec<u32> = definition
            .slots()
            .iter()
            .filter_map(|s| s.seat_number())
            .collect();
        numbers.sort_unstable();
        seats.extend(numbers.into_iter().map(|n| Seat::numbered(zone, grade, n)));
    }
    seats
}

pub fn standard_catalog() -> Result<SeatCatalog> {
    SeatCatalog::new(standard_seats())
}
