// bidmatrix/src/display.rs
//
// Terminal rendering of requirements, outcomes and the matrix (comfy-table).

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use bidmatrix_core::domain::matrix::table::{REQUIREMENTS_HEADER, is_trailer_label};
use bidmatrix_core::domain::matrix::{EvaluationTable, RequirementItem, Verdict};
use bidmatrix_core::domain::parsing::EvaluationOutcome;

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn verdict_cell(text: &str) -> Cell {
    let cell = Cell::new(text);
    match Verdict::from_cell(text) {
        Some(Verdict::Yes) => cell.fg(Color::Green),
        Some(Verdict::NotSure) => cell.fg(Color::Yellow),
        Some(Verdict::No) => cell.fg(Color::Red),
        None => cell,
    }
}

pub fn requirements_table(items: &[RequirementItem]) -> Table {
    let mut table = base_table();
    table.set_header(vec!["#", REQUIREMENTS_HEADER]);

    let mut number = 0;
    for item in items {
        match item {
            RequirementItem::Category(name) => {
                table.add_row(vec![Cell::new(""), Cell::new(name).fg(Color::Cyan)]);
            }
            RequirementItem::Requirement(text) => {
                number += 1;
                table.add_row(vec![Cell::new(number), Cell::new(text)]);
            }
        }
    }
    table
}

pub fn outcome_table(outcome: &EvaluationOutcome) -> Table {
    let mut table = base_table();
    table.set_header(vec![REQUIREMENTS_HEADER, outcome.vendor.as_str()]);

    for (label, cell) in &outcome.cells {
        table.add_row(vec![Cell::new(label), verdict_cell(cell)]);
    }
    table
}

pub fn matrix_table(matrix: &EvaluationTable) -> Table {
    let mut table = base_table();
    table.set_header(
        std::iter::once(REQUIREMENTS_HEADER).chain(matrix.vendors().iter().map(String::as_str)),
    );

    for row in matrix.rows() {
        let label = if is_trailer_label(&row.label) {
            Cell::new(&row.label).fg(Color::Magenta)
        } else {
            Cell::new(&row.label)
        };
        table.add_row(
            std::iter::once(label).chain(row.cells.iter().map(|cell| verdict_cell(cell))),
        );
    }
    table
}
