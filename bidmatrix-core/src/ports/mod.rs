// bidmatrix-core/src/ports/mod.rs
//
// What the use cases need from the outside world, without knowing how it's
// done: a way to read documents, a hosted model, a place to keep the matrix.

pub mod extractor;
pub mod model;
pub mod store;

pub use extractor::{Document, TextExtractor};
pub use model::{CompletionRequest, ModelCaller, PromptKind};
pub use store::TableStore;
