pub mod error;
pub mod matrix;
pub mod parsing;
pub mod project;

// Re-exports to keep imports short elsewhere
pub use error::DomainError;
