// bidmatrix-core/src/domain/project/mod.rs

pub mod configuration;
pub use configuration::{ModelConfig, ModelProvider, ProjectConfig};
