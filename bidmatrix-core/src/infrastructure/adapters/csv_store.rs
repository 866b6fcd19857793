// bidmatrix-core/src/infrastructure/adapters/csv_store.rs

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::matrix::table::REQUIREMENTS_HEADER;
use crate::domain::matrix::{EvaluationTable, TableRow};
use crate::error::BidMatrixError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;
use crate::ports::TableStore;

/// The matrix as a comma-delimited file: a `Requirements` column, then
/// one column per vendor. Readable by any spreadsheet.
#[derive(Debug, Clone)]
pub struct CsvTableStore {
    path: PathBuf,
}

impl CsvTableStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableStore for CsvTableStore {
    #[instrument(skip(self), fields(path = ?self.path))]
    fn load(&self) -> Result<Option<EvaluationTable>, BidMatrixError> {
        if !self.path.exists() {
            debug!("No matrix on disk yet");
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(InfrastructureError::from)?;

        let headers = reader.headers().map_err(InfrastructureError::from)?.clone();
        let mut columns = headers.iter();
        match columns.next().map(|h| h.trim_start_matches('\u{feff}').trim()) {
            Some(REQUIREMENTS_HEADER) => {}
            found => {
                return Err(DomainError::MalformedTable(format!(
                    "first column must be '{REQUIREMENTS_HEADER}', found '{}'",
                    found.unwrap_or_default()
                ))
                .into());
            }
        }
        let vendors: Vec<String> = columns.map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(InfrastructureError::from)?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            let mut fields = record.iter();
            let label = fields.next().unwrap_or_default().to_string();
            rows.push(TableRow {
                label,
                cells: fields.map(str::to_string).collect(),
            });
        }

        let table = EvaluationTable::from_parts(vendors, rows)?;
        debug!(
            rows = table.rows().len(),
            vendors = table.vendors().len(),
            "Loaded matrix"
        );
        Ok(Some(table))
    }

    #[instrument(skip(self, table), fields(path = ?self.path))]
    fn save(&self, table: &EvaluationTable) -> Result<(), BidMatrixError> {
        let bytes = render_csv(table)?;
        atomic_write(&self.path, bytes)?;
        info!(
            rows = table.rows().len(),
            vendors = table.vendors().len(),
            "Matrix saved"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serializes the matrix to CSV bytes, header first.
pub fn render_csv(table: &EvaluationTable) -> Result<Vec<u8>, InfrastructureError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(
        std::iter::once(REQUIREMENTS_HEADER).chain(table.vendors().iter().map(String::as_str)),
    )?;
    for row in table.rows() {
        writer.write_record(
            std::iter::once(row.label.as_str()).chain(row.cells.iter().map(String::as_str)),
        )?;
    }

    writer
        .into_inner()
        .map_err(|e| InfrastructureError::Io(e.into_error()))
}
