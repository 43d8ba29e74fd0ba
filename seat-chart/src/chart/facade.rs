//! Query Facade
//!
//! Composes the layout registry and the occupancy resolver into the slot
//! sequences a renderer draws. A [`SeatChart`] can only be built from a
//! registry/catalog pair that passed validation.

use crate::catalog::SeatCatalog;
use crate::core::{ChartError, Result, SeatKey};
use crate::layout::{LayoutRegistry, Slot, standard_catalog, standard_registry};
use crate::occupancy::{
    ColorKey, InteractionMode, LegendEntry, OccupancyResolver, Status, legend,
};
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Reservation, Seat, ZoneId};
use tracing::debug;

/// Per-render inputs
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'r> {
    pub reservations: &'r [Reservation],
    pub date: NaiveDate,
    pub mode: InteractionMode,
    pub selected_seat_id: Option<&'r str>,
}

impl<'r> RenderRequest<'r> {
    pub fn view(reservations: &'r [Reservation], date: NaiveDate) -> Self {
        Self {
            reservations,
            date,
            mode: InteractionMode::View,
            selected_seat_id: None,
        }
    }

    pub fn select(
        reservations: &'r [Reservation],
        date: NaiveDate,
        selected_seat_id: Option<&'r str>,
    ) -> Self {
        Self {
            reservations,
            date,
            mode: InteractionMode::Select,
            selected_seat_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatSlot<'a> {
    pub seat: &'a Seat,
    pub status: Status,
    pub selectable: bool,
    pub selected: bool,
    pub color: ColorKey,
}

/// One drawn position; computed per render, never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderSlot<'a> {
    Gap,
    Seat(SeatSlot<'a>),
}

impl<'a> RenderSlot<'a> {
    pub fn as_seat(&self) -> Option<&SeatSlot<'a>> {
        match self {
            RenderSlot::Seat(slot) => Some(slot),
            RenderSlot::Gap => None,
        }
    }
}

/// Seat counts for a zone header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    pub capacity: usize,
    pub empty: usize,
    pub reserved: usize,
    pub checked_in: usize,
    pub no_show: usize,
    /// Always 0 in view mode
    pub selectable: usize,
}

impl ZoneSummary {
    fn count(&mut self, slot: &SeatSlot<'_>) {
        self.capacity += 1;
        match slot.status {
            Status::Empty => self.empty += 1,
            Status::Reserved => self.reserved += 1,
            Status::CheckedIn => self.checked_in += 1,
            Status::NoShow => self.no_show += 1,
        }
        if slot.selectable {
            self.selectable += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView<'a> {
    pub name: &'a str,
    pub columns: u16,
    pub slots: Vec<RenderSlot<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneView<'a> {
    pub zone: ZoneId,
    pub grade: u8,
    pub sections: Vec<SectionView<'a>>,
    pub summary: ZoneSummary,
}

impl<'a> ZoneView<'a> {
    /// All slots in rendering order
    pub fn slots(&self) -> impl Iterator<Item = &RenderSlot<'a>> {
        self.sections.iter().flat_map(|s| s.slots.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView<'a> {
    pub grade: u8,
    pub date: NaiveDate,
    pub mode: InteractionMode,
    pub zones: Vec<ZoneView<'a>>,
    /// Only shown on the read-only chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<[LegendEntry; 4]>,
}

/// Validated layout registry + seat catalog
#[derive(Debug, Clone)]
pub struct SeatChart {
    registry: LayoutRegistry,
    catalog: SeatCatalog,
}

impl SeatChart {
    /// Validates `registry` against `catalog`; a mismatch halts construction
    pub fn new(registry: LayoutRegistry, catalog: SeatCatalog) -> Result<Self> {
        registry.validate(&catalog)?;
        Ok(Self { registry, catalog })
    }

    /// Built-in A-D floor plan with its standard seat catalog
    pub fn standard() -> Result<Self> {
        Self::new(standard_registry()?, standard_catalog()?)
    }

    /// Built-in floor plan over a caller-supplied catalog
    pub fn with_catalog(catalog: SeatCatalog) -> Result<Self> {
        Self::new(standard_registry()?, catalog)
    }

    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &SeatCatalog {
        &self.catalog
    }

    pub fn resolver<'r>(&'r self, request: &RenderRequest<'r>) -> OccupancyResolver<'r> {
        OccupancyResolver::new(&self.catalog, request.reservations, request.date)
    }

    /// Ordered render slots of `zone` for a viewer of `grade`
    ///
    /// Empty when the zone is hidden from that grade. Slot order and count
    /// follow the layout definition exactly.
    pub fn render_slots(
        &self,
        zone: ZoneId,
        grade: u8,
        request: &RenderRequest<'_>,
    ) -> Result<Vec<RenderSlot<'_>>> {
        let Some(slots) = self.registry.slots(zone, grade)? else {
            debug!(zone = %zone, grade, "Zone hidden from grade");
            return Ok(Vec::new());
        };

        debug!(zone = %zone, grade, date = %request.date, mode = %request.mode, "Rendering zone slots");
        let resolver =
            OccupancyResolver::new(&self.catalog, request.reservations, request.date);
        self.render_run(zone, slots, &resolver, request)
    }

    /// Sectioned view of `zone` with its header counts; `None` when hidden
    pub fn render_zone(
        &self,
        zone: ZoneId,
        grade: u8,
        request: &RenderRequest<'_>,
    ) -> Result<Option<ZoneView<'_>>> {
        let Some(sections) = self.registry.sections(zone, grade)? else {
            return Ok(None);
        };

        debug!(zone = %zone, grade, date = %request.date, mode = %request.mode, "Rendering zone");
        let resolver =
            OccupancyResolver::new(&self.catalog, request.reservations, request.date);

        let mut summary = ZoneSummary::default();
        let mut views = Vec::with_capacity(sections.len());
        for (section, slots) in sections {
            let slots = self.render_run(zone, slots, &resolver, request)?;
            slots
                .iter()
                .filter_map(RenderSlot::as_seat)
                .for_each(|slot| summary.count(slot));
            views.push(SectionView {
                name: section.name.as_str(),
                columns: section.columns,
                slots,
            });
        }

        Ok(Some(ZoneView {
            zone,
            grade,
            sections: views,
            summary,
        }))
    }

    /// Every zone visible to `grade`, in chart order
    pub fn render_chart(&self, grade: u8, request: &RenderRequest<'_>) -> Result<ChartView<'_>> {
        let mut zones = Vec::new();
        for definition in self.registry.zones_for_grade(grade) {
            if let Some(view) = self.render_zone(definition.zone(), grade, request)? {
                zones.push(view);
            }
        }

        Ok(ChartView {
            grade,
            date: request.date,
            mode: request.mode,
            zones,
            legend: (request.mode == InteractionMode::View).then(legend),
        })
    }

    fn render_run<'a>(
        &'a self,
        zone: ZoneId,
        slots: &[Slot],
        resolver: &OccupancyResolver<'_>,
        request: &RenderRequest<'_>,
    ) -> Result<Vec<RenderSlot<'a>>> {
        slots
            .iter()
            .map(|slot| match *slot {
                Slot::Gap => Ok(RenderSlot::Gap),
                Slot::Seat(number) => {
                    let seat = self
                        .catalog
                        .by_number(zone, number)
                        .ok_or(ChartError::UnknownSeat(SeatKey::Number { zone, number }))?;
                    let state = resolver.resolve(seat, request.mode, request.selected_seat_id);
                    Ok(RenderSlot::Seat(SeatSlot {
                        seat,
                        status: state.status,
                        selectable: state.selectable,
                        selected: state.selected,
                        color: state.color,
                    }))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayoutIssue;
    use crate::layout::ZoneLayoutDefinition;
    use shared::models::ReservationStatus;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn small_chart() -> SeatChart {
        let registry = LayoutRegistry::new()
            .with(ZoneLayoutDefinition::flat(
                ZoneId::B,
                2,
                4,
                vec![Slot::Seat(1), Slot::Seat(2), Slot::Gap, Slot::Seat(3)],
            ))
            .unwrap();
        let catalog =
            SeatCatalog::new((1..=3).map(|n| Seat::numbered(ZoneId::B, 2, n)).collect()).unwrap();
        SeatChart::new(registry, catalog).unwrap()
    }

    fn statuses(slots: &[RenderSlot<'_>]) -> Vec<Option<(u32, Status)>> {
        slots
            .iter()
            .map(|s| s.as_seat().map(|seat| (seat.seat.number, seat.status)))
            .collect()
    }

    #[test]
    fn test_render_slots_view_mode() {
        let chart = small_chart();
        let reservations = vec![Reservation::new("B-2", date(), ReservationStatus::CheckedIn)];
        let slots = chart
            .render_slots(ZoneId::B, 2, &RenderRequest::view(&reservations, date()))
            .unwrap();

        assert_eq!(
            statuses(&slots),
            vec![
                Some((1, Status::Empty)),
                Some((2, Status::CheckedIn)),
                None,
                Some((3, Status::Empty)),
            ]
        );
        assert!(slots.iter().filter_map(RenderSlot::as_seat).all(|s| !s.selectable));
    }

    #[test]
    fn test_render_slots_select_mode() {
        let chart = small_chart();
        let reservations = vec![Reservation::new("B-2", date(), ReservationStatus::CheckedIn)];
        let request = RenderRequest::select(&reservations, date(), Some("B-3"));
        let slots = chart.render_slots(ZoneId::B, 2, &request).unwrap();

        let seats: Vec<&SeatSlot<'_>> = slots.iter().filter_map(RenderSlot::as_seat).collect();
        assert!(seats[0].selectable);
        assert!(!seats[1].selectable);
        assert_eq!(seats[1].color, ColorKey::Blocked);
        assert!(seats[2].selectable);
        assert!(seats[2].selected);
        assert_eq!(seats[2].color, ColorKey::Selected);
        assert_eq!(seats.iter().filter(|s| s.selected).count(), 1);
    }

    #[test]
    fn test_render_slots_hidden_zone_is_empty() {
        let chart = small_chart();
        let slots = chart
            .render_slots(ZoneId::B, 3, &RenderRequest::view(&[], date()))
            .unwrap();
        assert!(slots.is_empty());
        assert!(
            chart
                .render_zone(ZoneId::B, 3, &RenderRequest::view(&[], date()))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_render_slots_unknown_zone() {
        let chart = small_chart();
        let err = chart
            .render_slots(ZoneId::D, 2, &RenderRequest::view(&[], date()))
            .unwrap_err();
        assert!(matches!(err, ChartError::UnknownZone(_)));
    }

    #[test]
    fn test_new_rejects_inconsistent_layout() {
        let registry = LayoutRegistry::new()
            .with(ZoneLayoutDefinition::flat(
                ZoneId::B,
                2,
                2,
                vec![Slot::Seat(1), Slot::Seat(2)],
            ))
            .unwrap();
        let catalog = SeatCatalog::new(vec![Seat::numbered(ZoneId::B, 2, 1)]).unwrap();

        let err = SeatChart::new(registry, catalog).unwrap_err();
        assert!(matches!(
            err,
            ChartError::LayoutInconsistency {
                zone: ZoneId::B,
                detail: LayoutIssue::MissingSeat(2)
            }
        ));
    }

    #[test]
    fn test_render_zone_summary() {
        let chart = SeatChart::standard().unwrap();
        let reservations = vec![
            Reservation::new("C-1", date(), ReservationStatus::Reserved),
            Reservation::new("C-2", date(), ReservationStatus::CheckedIn),
            Reservation::new("C-3", date(), ReservationStatus::NoShow),
            Reservation::new("C-4", date(), ReservationStatus::CheckedOut),
        ];
        let request = RenderRequest::select(&reservations, date(), None);
        let view = chart.render_zone(ZoneId::C, 2, &request).unwrap().unwrap();

        assert_eq!(
            view.summary,
            ZoneSummary {
                capacity: 26,
                empty: 23,
                reserved: 1,
                checked_in: 1,
                no_show: 1,
                selectable: 23,
            }
        );
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].columns, 7);
        assert_eq!(view.slots().count(), 28);
    }

    #[test]
    fn test_render_chart_by_grade() {
        let chart = SeatChart::standard().unwrap();

        let grade2 = chart
            .render_chart(2, &RenderRequest::view(&[], date()))
            .unwrap();
        let zones: Vec<ZoneId> = grade2.zones.iter().map(|z| z.zone).collect();
        assert_eq!(zones, vec![ZoneId::B, ZoneId::C, ZoneId::D]);
        assert!(grade2.legend.is_some());

        let grade3 = chart
            .render_chart(3, &RenderRequest::select(&[], date(), None))
            .unwrap();
        assert_eq!(grade3.zones.len(), 1);
        assert_eq!(grade3.zones[0].zone, ZoneId::A);
        assert!(grade3.legend.is_none());

        let grade1 = chart
            .render_chart(1, &RenderRequest::view(&[], date()))
            .unwrap();
        assert!(grade1.zones.is_empty());
    }

    #[test]
    fn test_render_slot_serialization() {
        let chart = small_chart();
        let reservations = vec![Reservation::new("B-2", date(), ReservationStatus::NoShow)];
        let slots = chart
            .render_slots(ZoneId::B, 2, &RenderRequest::view(&reservations, date()))
            .unwrap();

        let json = serde_json::to_value(&slots).unwrap();
        assert_eq!(json[1]["kind"], "seat");
        assert_eq!(json[1]["seat"]["id"], "B-2");
        assert_eq!(json[1]["status"], "no-show");
        assert_eq!(json[1]["color"], "no-show");
        assert_eq!(json[2]["kind"], "gap");
    }
}
