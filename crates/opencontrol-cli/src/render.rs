//! Rendering of loaded standards for terminal, JSON and CSV output.
//!
//! Every renderer walks controls through [`Standard::sorted_controls`], so the
//! output order is the natural identifier order regardless of format.

use std::io::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use opencontrol_standards::Standard;

use crate::pipeline::CheckOutcome;

#[derive(Debug, Serialize)]
pub struct StandardView<'a> {
    pub name: &'a str,
    pub controls: Vec<ControlView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ControlView<'a> {
    pub id: &'a str,
    pub family: &'a str,
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> StandardView<'a> {
    pub fn new(standard: &'a Standard) -> Self {
        let controls = standard
            .sorted_controls()
            .into_iter()
            .map(|(id, control)| ControlView {
                id,
                family: &control.family,
                name: &control.name,
                description: &control.description,
            })
            .collect();
        Self {
            name: standard.name(),
            controls,
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    standard: &'a str,
    id: &'a str,
    family: &'a str,
    name: &'a str,
    description: &'a str,
}

pub fn standard_table(standard: &Standard) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Control"),
        header_cell("Family"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    for (id, control) in standard.sorted_controls() {
        table.add_row(vec![
            Cell::new(id).add_attribute(Attribute::Bold),
            Cell::new(&control.family),
            Cell::new(&control.name),
        ]);
    }
    table
}

pub fn check_table(outcomes: &[CheckOutcome]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Standard"),
        header_cell("Controls"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for outcome in outcomes {
        let file = Cell::new(outcome.path.display());
        let row = match &outcome.result {
            Ok(report) => vec![
                file,
                Cell::new("ok").fg(Color::Green),
                Cell::new(&report.name),
                Cell::new(report.control_count),
                Cell::new(format!("sha256 {}", report.sha256)),
            ],
            Err(error) => vec![
                file,
                Cell::new(error.kind()).fg(Color::Red),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new(error.to_string()),
            ],
        };
        table.add_row(row);
    }
    table
}

pub fn standards_json(standards: &[&Standard]) -> serde_json::Result<String> {
    let views: Vec<StandardView<'_>> = standards.iter().map(|s| StandardView::new(s)).collect();
    serde_json::to_string_pretty(&views)
}

/// Write one CSV row per control, standards in the given order.
pub fn write_standards_csv<W: Write>(writer: W, standards: &[&Standard]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for standard in standards {
        for (id, control) in standard.sorted_controls() {
            writer.serialize(CsvRow {
                standard: standard.name(),
                id,
                family: &control.family,
                name: &control.name,
                description: &control.description,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
