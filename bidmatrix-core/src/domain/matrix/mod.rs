// bidmatrix-core/src/domain/matrix/mod.rs

pub mod requirement;
pub mod score;
pub mod table;
pub mod verdict;

// Re-exports
pub use requirement::RequirementItem;
pub use score::ScoreSummary;
pub use table::{EvaluationTable, TableRow, VendorColumn};
pub use verdict::{Assessment, Verdict};
