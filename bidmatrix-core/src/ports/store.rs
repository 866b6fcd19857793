// bidmatrix-core/src/ports/store.rs

use crate::domain::matrix::EvaluationTable;
use crate::error::BidMatrixError;

/// Durable home of the evaluation matrix. The whole table is loaded,
/// mutated in memory, and saved back.
pub trait TableStore: Send + Sync {
    /// `Ok(None)` when no matrix has been created yet.
    fn load(&self) -> Result<Option<EvaluationTable>, BidMatrixError>;

    fn save(&self, table: &EvaluationTable) -> Result<(), BidMatrixError>;

    /// Human-readable location, for messages.
    fn location(&self) -> String;
}
