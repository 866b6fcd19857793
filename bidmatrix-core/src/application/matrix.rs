// bidmatrix-core/src/application/matrix.rs

use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::matrix::EvaluationTable;
use crate::error::BidMatrixError;
use crate::ports::TableStore;

/// `ReadTable`: the current matrix, or `TableNotFound` before the first analysis.
pub fn read_matrix(store: &dyn TableStore) -> Result<EvaluationTable, BidMatrixError> {
    store
        .load()?
        .ok_or_else(|| DomainError::TableNotFound(store.location()).into())
}

/// Copies the matrix from one store to another (e.g. a download path).
#[instrument(skip_all, fields(from = %source.location(), to = %target.location()))]
pub fn export_matrix(
    source: &dyn TableStore,
    target: &dyn TableStore,
) -> Result<EvaluationTable, BidMatrixError> {
    let table = read_matrix(source)?;
    target.save(&table)?;
    info!(rows = table.rows().len(), "Matrix exported");
    Ok(table)
}
