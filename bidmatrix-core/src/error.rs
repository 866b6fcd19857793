// bidmatrix-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum BidMatrixError {
    // --- DOMAIN ERRORS (empty extraction, table state, vendor names) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, documents, model calls, parsing) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    #[diagnostic(code(bidmatrix::internal))]
    InternalError(String),
}

// Lets `?` lift plain IO errors without naming the infrastructure layer
impl From<std::io::Error> for BidMatrixError {
    fn from(err: std::io::Error) -> Self {
        BidMatrixError::Infrastructure(InfrastructureError::Io(err))
    }
}
