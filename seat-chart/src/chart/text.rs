//! Plain-text chart rendering for the terminal
//!
//! Each slot becomes a fixed-width cell; sections are printed as separate
//! blocks wrapped at their column count.

use super::facade::{ChartView, RenderSlot, ZoneView};
use crate::occupancy::{ColorKey, LegendEntry, Status};
use std::fmt::Write;

const CELL_WIDTH: usize = 5;

fn marker(color: ColorKey) -> char {
    match color {
        ColorKey::None | ColorKey::Available => ' ',
        ColorKey::Reserved => 'r',
        ColorKey::CheckedIn => 'c',
        ColorKey::NoShow => 'n',
        ColorKey::Selected => '*',
        ColorKey::Blocked => 'x',
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Empty => "empty",
        Status::Reserved => "reserved",
        Status::CheckedIn => "checked-in",
        Status::NoShow => "no-show",
    }
}

fn cell(slot: &RenderSlot<'_>) -> String {
    match slot {
        RenderSlot::Gap => " ".repeat(CELL_WIDTH),
        RenderSlot::Seat(seat) => {
            format!("[{:>2}{}]", seat.seat.number, marker(seat.color))
        }
    }
}

pub fn render_zone(out: &mut String, zone: &ZoneView<'_>) {
    let s = &zone.summary;
    let _ = writeln!(
        out,
        "Zone {} - grade {} - {} seats (empty {}, reserved {}, checked-in {}, no-show {})",
        zone.zone, zone.grade, s.capacity, s.empty, s.reserved, s.checked_in, s.no_show
    );

    for section in &zone.sections {
        let _ = writeln!(out, "  {}", section.name);
        for row in section.slots.chunks(section.columns as usize) {
            let line: Vec<String> = row.iter().map(cell).collect();
            let _ = writeln!(out, "  {}", line.join(" ").trim_end());
        }
    }
}

pub fn render_legend(out: &mut String, legend: &[LegendEntry]) {
    let _ = writeln!(out, "Legend:");
    for entry in legend {
        let _ = writeln!(
            out,
            "  [{}] {}",
            marker(entry.color),
            status_label(entry.status)
        );
    }
}

pub fn render_chart(chart: &ChartView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Seating chart - grade {} - {} ({} mode)",
        chart.grade, chart.date, chart.mode
    );

    if chart.zones.is_empty() {
        let _ = writeln!(out, "(no zones for this grade)");
    }
    for zone in &chart.zones {
        out.push('\n');
        render_zone(&mut out, zone);
    }

    if let Some(legend) = &chart.legend {
        out.push('\n');
        render_legend(&mut out, legend);
    }
    out
}
