// bidmatrix-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Nothing extracted: the model responded but no {what} could be parsed")]
    #[diagnostic(
        code(bidmatrix::domain::nothing_extracted),
        help("Re-run with -vv to trace the model call, or try `response-format: flat`.")
    )]
    NothingExtracted { what: String },

    #[error("No evaluation matrix found at '{0}'")]
    #[diagnostic(
        code(bidmatrix::domain::table_not_found),
        help("Run `bidmatrix analyze <RFP>` first to create the evaluation matrix.")
    )]
    TableNotFound(String),

    #[error("Invalid vendor name: '{0}'")]
    #[diagnostic(
        code(bidmatrix::domain::vendor_name),
        help("Vendor names must be non-empty and cannot be 'Requirements'.")
    )]
    InvalidVendorName(String),

    #[error("Malformed evaluation matrix: {0}")]
    #[diagnostic(code(bidmatrix::domain::malformed_table))]
    MalformedTable(String),
}
