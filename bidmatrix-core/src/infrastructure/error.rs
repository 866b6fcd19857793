// bidmatrix-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(bidmatrix::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(bidmatrix::infra::yaml),
        help("Check your bidmatrix.yaml syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(bidmatrix::infra::config))]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(bidmatrix::infra::config_invalid),
        help("See the `model` and `max-document-chars` sections of bidmatrix.yaml.")
    )]
    InvalidConfig(#[from] validator::ValidationErrors),

    // --- TEMPLATING ---
    #[error("Prompt Rendering Error: {0}")]
    #[diagnostic(code(bidmatrix::infra::template))]
    TemplateError(#[from] minijinja::Error),

    // --- MATRIX FILE ---
    #[error("CSV Error: {0}")]
    #[diagnostic(
        code(bidmatrix::infra::csv),
        help("The evaluation matrix must be a comma-delimited UTF-8 file.")
    )]
    Csv(#[from] csv::Error),

    // --- EXTERNAL COLLABORATORS ---
    #[error("Could not extract text from '{document}': {reason}")]
    #[diagnostic(
        code(bidmatrix::infra::extraction),
        help("Supported documents are text-based PDF, .txt and .md files.")
    )]
    Extraction { document: String, reason: String },

    #[error("Model call failed: {0}")]
    #[diagnostic(
        code(bidmatrix::infra::model_call),
        help("Check AWS credentials, region and Bedrock model access. The call is not retried.")
    )]
    ModelCall(String),
}
