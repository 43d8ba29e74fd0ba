//! Zone Layout Registry
//!
//! Owns one [`ZoneLayoutDefinition`] per zone, answers slot lookups for a
//! (zone, grade) pair, and checks the layouts against a seat catalog.

use super::definition::{LayoutSection, Slot, ZoneLayoutDefinition};
use crate::catalog::SeatCatalog;
use crate::core::{ChartError, LayoutIssue, Result};
use shared::models::ZoneId;
use std::collections::HashSet;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    /// Registration order is chart order
    zones: Vec<ZoneLayoutDefinition>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: ZoneLayoutDefinition) -> Result<()> {
        if self.zones.iter().any(|d| d.zone() == definition.zone()) {
            return Err(ChartError::DuplicateZone(definition.zone()));
        }
        self.zones.push(definition);
        Ok(())
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, definition: ZoneLayoutDefinition) -> Result<Self> {
        self.register(definition)?;
        Ok(self)
    }

    pub fn definition(&self, zone: ZoneId) -> Result<&ZoneLayoutDefinition> {
        self.zones
            .iter()
            .find(|d| d.zone() == zone)
            .ok_or_else(|| ChartError::UnknownZone(zone.to_string()))
    }

    /// Slots of `zone` as seen by `grade`
    ///
    /// `Ok(None)` means the zone exists but is hidden from this grade.
    pub fn slots(&self, zone: ZoneId, grade: u8) -> Result<Option<&[Slot]>> {
        let definition = self.definition(zone)?;
        Ok(definition.is_visible_to(grade).then(|| definition.slots()))
    }

    /// Section-level variant of [`slots`](Self::slots)
    pub fn sections(
        &self,
        zone: ZoneId,
        grade: u8,
    ) -> Result<Option<Vec<(&LayoutSection, &[Slot])>>> {
        let definition = self.definition(zone)?;
        Ok(definition
            .is_visible_to(grade)
            .then(|| definition.sections().collect()))
    }

    /// Zones `grade` may see, in chart order
    pub fn zones_for_grade(&self, grade: u8) -> impl Iterator<Item = &ZoneLayoutDefinition> {
        self.zones.iter().filter(move |d| d.is_visible_to(grade))
    }

    pub fn zones(&self) -> impl Iterator<Item = &ZoneLayoutDefinition> {
        self.zones.iter()
    }

    /// Every mismatch between the layouts and `catalog`
    ///
    /// Per zone: slot references are reported in slot order, then catalog
    /// seats ascending by number.
    pub fn inconsistencies(&self, catalog: &SeatCatalog) -> Vec<(ZoneId, LayoutIssue)> {
        let mut issues = Vec::new();

        for definition in &self.zones {
            let zone = definition.zone();
            let mut referenced = HashSet::new();

            for number in definition.slots().iter().filter_map(Slot::seat_number) {
                if !referenced.insert(number) {
                    issues.push((zone, LayoutIssue::DuplicateReference(number)));
                } else if catalog.by_number(zone, number).is_none() {
                    issues.push((zone, LayoutIssue::MissingSeat(number)));
                }
            }

            for seat in catalog.in_zone(zone) {
                if seat.grade != definition.grade() {
                    issues.push((
                        zone,
                        LayoutIssue::GradeMismatch {
                            number: seat.number,
                            grade: seat.grade,
                        },
                    ));
                } else if !referenced.contains(&seat.number) {
                    issues.push((zone, LayoutIssue::OrphanedSeat(seat.number)));
                }
            }
        }

        issues
    }

    /// Check every layout against `catalog`; fails on the first mismatch
    ///
    /// Run once at startup. All mismatches are logged before returning.
    pub fn validate(&self, catalog: &SeatCatalog) -> Result<()> {
        let issues = self.inconsistencies(catalog);

        for (zone, issue) in &issues {
            warn!(zone = %zone, issue = %issue, "Layout inconsistency");
        }

        match issues.into_iter().next() {
            Some((zone, detail)) => Err(ChartError::LayoutInconsistency { zone, detail }),
            None => {
                info!(
                    zones = self.zones.len(),
                    seats = catalog.len(),
                    "Zone layouts validated"
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Seat;

    fn small_layout() -> ZoneLayoutDefinition {
        ZoneLayoutDefinition::flat(
            ZoneId::B,
            2,
            4,
            vec![Slot::Seat(1), Slot::Seat(2), Slot::Gap, Slot::Seat(3)],
        )
    }

    fn catalog(numbers: &[u32]) -> SeatCatalog {
        SeatCatalog::new(
            numbers
                .iter()
                .map(|&n| Seat::numbered(ZoneId::B, 2, n))
                .collect(),
        )
        .unwrap()
    }

    fn registry() -> LayoutRegistry {
        LayoutRegistry::new().with(small_layout()).unwrap()
    }

    #[test]
    fn test_slots_for_matching_grade() {
        let registry = registry();
        let slots = registry.slots(ZoneId::B, 2).unwrap().unwrap();
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[2], Slot::Gap);
    }

    #[test]
    fn test_slots_hidden_for_other_grade() {
        let registry = registry();
        assert!(registry.slots(ZoneId::B, 3).unwrap().is_none());
        assert!(registry.sections(ZoneId::B, 1).unwrap().is_none());
    }

    #[test]
    fn test_unknown_zone() {
        let registry = registry();
        let err = registry.slots(ZoneId::A, 2).unwrap_err();
        assert!(matches!(err, ChartError::UnknownZone(ref z) if z == "A"));
    }

    #[test]
    fn test_duplicate_zone_rejected() {
        let mut registry = registry();
        let err = registry.register(small_layout()).unwrap_err();
        assert!(matches!(err, ChartError::DuplicateZone(ZoneId::B)));
    }

    #[test]
    fn test_zones_for_grade() {
        let registry = LayoutRegistry::new()
            .with(ZoneLayoutDefinition::flat(ZoneId::A, 3, 1, vec![Slot::Seat(1)]))
            .unwrap()
            .with(small_layout())
            .unwrap()
            .with(ZoneLayoutDefinition::flat(ZoneId::C, 2, 1, vec![Slot::Seat(1)]))
            .unwrap();

        let zones: Vec<ZoneId> = registry.zones_for_grade(2).map(|d| d.zone()).collect();
        assert_eq!(zones, vec![ZoneId::B, ZoneId::C]);
        assert_eq!(registry.zones_for_grade(1).count(), 0);
    }

    #[test]
    fn test_validate_consistent() {
        assert!(registry().validate(&catalog(&[1, 2, 3])).is_ok());
    }

    #[test]
    fn test_validate_missing_seat() {
        let err = registry().validate(&catalog(&[1, 3])).unwrap_err();
        assert!(matches!(
            err,
            ChartError::LayoutInconsistency {
                zone: ZoneId::B,
                detail: LayoutIssue::MissingSeat(2)
            }
        ));
    }

    #[test]
    fn test_validate_orphaned_seat() {
        let err = registry().validate(&catalog(&[1, 2, 3, 4])).unwrap_err();
        assert!(matches!(
            err,
            ChartError::LayoutInconsistency {
                zone: ZoneId::B,
                detail: LayoutIssue::OrphanedSeat(4)
            }
        ));
    }

    #[test]
    fn test_validate_duplicate_reference() {
        let registry = LayoutRegistry::new()
            .with(ZoneLayoutDefinition::flat(
                ZoneId::B,
                2,
                3,
                vec![Slot::Seat(1), Slot::Seat(2), Slot::Seat(2)],
            ))
            .unwrap();
        let issues = registry.inconsistencies(&catalog(&[1, 2]));
        assert_eq!(issues, vec![(ZoneId::B, LayoutIssue::DuplicateReference(2))]);
    }

    #[test]
    fn test_grade_mismatch_reported_once() {
        let seats = vec![
            Seat::numbered(ZoneId::B, 2, 1),
            Seat::numbered(ZoneId::B, 3, 2),
            Seat::numbered(ZoneId::B, 2, 3),
        ];
        let issues = registry().inconsistencies(&SeatCatalog::new(seats).unwrap());
        assert_eq!(
            issues,
            vec![(
                ZoneId::B,
                LayoutIssue::GradeMismatch {
                    number: 2,
                    grade: 3
                }
            )]
        );
    }

    #[test]
    fn test_inconsistencies_collects_everything() {
        let issues = registry().inconsistencies(&catalog(&[2, 3, 5, 6]));
        assert_eq!(
            issues,
            vec![
                (ZoneId::B, LayoutIssue::MissingSeat(1)),
                (ZoneId::B, LayoutIssue::OrphanedSeat(5)),
                (ZoneId::B, LayoutIssue::OrphanedSeat(6)),
            ]
        );
    }

    #[test]
    fn test_unregistered_zones_are_ignored() {
        let mut seats: Vec<Seat> = (1..=3).map(|n| Seat::numbered(ZoneId::B, 2, n)).collect();
        seats.push(Seat::numbered(ZoneId::D, 2, 1));
        assert!(registry().validate(&SeatCatalog::new(seats).unwrap()).is_ok());
    }
}
