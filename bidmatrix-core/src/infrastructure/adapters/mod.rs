// bidmatrix-core/src/infrastructure/adapters/mod.rs

pub mod bedrock;
pub mod csv_store;
pub mod document;
pub mod replay;

pub use bedrock::BedrockModelCaller;
pub use csv_store::{CsvTableStore, render_csv};
pub use document::DocumentTextExtractor;
pub use replay::ReplayModelCaller;

use crate::domain::project::{ModelProvider, ProjectConfig};
use crate::ports::ModelCaller;
use std::path::Path;
use tracing::info;

/// Builds the model collaborator the project is configured for.
pub async fn model_from_config(config: &ProjectConfig, project_dir: &Path) -> Box<dyn ModelCaller> {
    match config.model.provider {
        ModelProvider::Bedrock => {
            info!(region = %config.model.region, model = %config.model.model_id, "Using Bedrock");
            Box::new(BedrockModelCaller::new(&config.model.region, &config.model.model_id).await)
        }
        ModelProvider::Replay => {
            let dir = config.model.replay_dir_in(project_dir);
            info!(dir = ?dir, "Using recorded responses");
            Box::new(ReplayModelCaller::new(dir))
        }
    }
}
