// bidmatrix-core/src/infrastructure/prompts/mod.rs

pub mod jinja;

pub use jinja::PromptRenderer;
