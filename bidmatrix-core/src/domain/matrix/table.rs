// bidmatrix-core/src/domain/matrix/table.rs

use std::collections::{HashMap, HashSet};

use crate::domain::error::DomainError;
use crate::domain::matrix::requirement::RequirementItem;

/// Header of the leading column.
pub const REQUIREMENTS_HEADER: &str = "Requirements";

/// Trailer rows, always the last two rows in this order.
pub const PRICE_ROW: &str = "Proposal Price";
pub const SCORE_ROW: &str = "Overall Score";

pub fn is_trailer_label(label: &str) -> bool {
    let label = label.trim();
    label == PRICE_ROW || label == SCORE_ROW
}

/// Trims and checks a vendor name before it becomes a column key.
/// Keys are exact strings: "Vendor A" and "vendor a" are two columns.
pub fn validate_vendor_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == REQUIREMENTS_HEADER {
        return Err(DomainError::InvalidVendorName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub label: String,
    /// One cell per vendor, in `EvaluationTable::vendors` order.
    pub cells: Vec<String>,
}

/// A vendor's results keyed by requirement label, in requirement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorColumn {
    pub vendor: String,
    pub cells: Vec<(String, String)>,
}

/// The requirement x vendor comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EvaluationTable {
    vendors: Vec<String>,
    rows: Vec<TableRow>,
}

impl EvaluationTable {
    /// Seeds a table with the requirement column only.
    pub fn from_requirements(items: &[RequirementItem]) -> Self {
        let rows = items
            .iter()
            .map(|item| TableRow {
                label: item.label(),
                cells: Vec::new(),
            })
            .collect();
        Self {
            vendors: Vec::new(),
            rows,
        }
    }

    /// Rebuilds a table read from storage. Short rows are padded with blank
    /// cells; rows wider than the header are rejected.
    pub fn from_parts(vendors: Vec<String>, rows: Vec<TableRow>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for vendor in &vendors {
            if !seen.insert(vendor.as_str()) {
                return Err(DomainError::MalformedTable(format!(
                    "duplicate vendor column '{vendor}'"
                )));
            }
        }

        let width = vendors.len();
        let mut normalized = Vec::with_capacity(rows.len());
        for mut row in rows {
            if row.cells.len() > width {
                return Err(DomainError::MalformedTable(format!(
                    "row '{}' has {} cells but only {} vendor columns",
                    row.label,
                    row.cells.len(),
                    width
                )));
            }
            row.cells.resize(width, String::new());
            normalized.push(row);
        }

        Ok(Self {
            vendors,
            rows: normalized,
        })
    }

    pub fn vendors(&self) -> &[String] {
        &self.vendors
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_vendor(&self, vendor: &str) -> bool {
        self.vendors.iter().any(|v| v == vendor)
    }

    /// Labels of every non-trailer row, category markers included.
    pub fn requirement_labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| !is_trailer_label(&row.label))
            .map(|row| row.label.clone())
            .collect()
    }

    pub fn cell(&self, label: &str, vendor: &str) -> Option<&str> {
        let idx = self.vendors.iter().position(|v| v == vendor)?;
        self.rows
            .iter()
            .find(|row| row.label == label)
            .and_then(|row| row.cells.get(idx))
            .map(String::as_str)
    }

    /// Sets (or overwrites) the vendor's column.
    ///
    /// Rows are matched on their exact label; labels the table does not know
    /// yet are appended. Trailer rows are re-pinned to the tail afterwards, so
    /// merging the same column twice leaves the table unchanged.
    pub fn merge_column(&mut self, column: &VendorColumn) {
        let idx = match self.vendors.iter().position(|v| *v == column.vendor) {
            Some(idx) => idx,
            None => {
                self.vendors.push(column.vendor.clone());
                for row in &mut self.rows {
                    row.cells.push(String::new());
                }
                self.vendors.len() - 1
            }
        };

        let lookup: HashMap<&str, &str> = column
            .cells
            .iter()
            .map(|(label, value)| (label.as_str(), value.as_str()))
            .collect();

        for row in &mut self.rows {
            row.cells[idx] = lookup
                .get(row.label.as_str())
                .map(|value| value.to_string())
                .unwrap_or_default();
        }

        let mut known: HashSet<String> = self.rows.iter().map(|row| row.label.clone()).collect();
        for (label, _) in &column.cells {
            if known.insert(label.clone()) {
                let mut cells = vec![String::new(); self.vendors.len()];
                cells[idx] = lookup.get(label.as_str()).copied().unwrap_or_default().to_string();
                self.rows.push(TableRow {
                    label: label.clone(),
                    cells,
                });
            }
        }

        self.pin_trailers();
    }

    fn pin_trailers(&mut self) {
        let rows = std::mem::take(&mut self.rows);
        let (trailers, body): (Vec<TableRow>, Vec<TableRow>) = rows
            .into_iter()
            .partition(|row| is_trailer_label(&row.label));
        let (prices, scores): (Vec<TableRow>, Vec<TableRow>) = trailers
            .into_iter()
            .partition(|row| row.label.trim() == PRICE_ROW);

        self.rows = body;
        self.rows.extend(prices);
        self.rows.extend(scores);
    }
}
