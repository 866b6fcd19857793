// bidmatrix-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (external systems)
// The document reader, the hosted model and the matrix store, seen from the inside.
pub mod ports;

// 2. Domain
// Evaluation matrix, verdicts, scores and the response parsers.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Bedrock, pdf-extract, CSV file store, YAML config, minijinja prompts.
pub mod infrastructure;

// 4. Application (Use Cases)
// RFP analysis and proposal scoring.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::BidMatrixError;
