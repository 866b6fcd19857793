// bidmatrix-core/src/application/mod.rs

pub mod analysis;
pub mod context;
pub mod matrix;
pub mod ports;
pub mod scoring;

#[cfg(test)]
mod testing;

// --- RE-EXPORTS (FACADE) ---
// The CLI only needs `use bidmatrix_core::application::{analyze_rfp, score_proposal, ...}`.

pub use analysis::{AnalysisReport, analyze_rfp, create_matrix};
pub use context::{RunSettings, Workbench};
pub use matrix::{export_matrix, read_matrix};
pub use scoring::{ScoringReport, score_proposal};
