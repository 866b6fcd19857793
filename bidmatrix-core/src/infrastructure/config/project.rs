// bidmatrix-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::parsing::ResponseFormat;
use crate::domain::project::configuration::{ModelProvider, ProjectConfig};
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["bidmatrix.yaml", "bidmatrix_project.yaml"];

/// Loads `bidmatrix.yaml` from `project_dir`, then layers environment overrides.
///
/// The file is optional: a bare directory with an RFP in it is a valid
/// project and runs on defaults.
#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    let mut config = match find_main_config(project_dir) {
        Some(config_path) => {
            info!(path = ?config_path, "Loading project configuration");
            let content = fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&content)?
        }
        None => {
            info!(dir = ?project_dir, "No bidmatrix.yaml found, using defaults");
            ProjectConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

/// Applies `BIDMATRIX_*` and the AWS/Bedrock variables on top of the file.
///
/// Takes the lookup as a closure so callers (and tests) decide where the
/// variables come from.
pub fn apply_env_overrides<F>(config: &mut ProjectConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("BIDMATRIX_TABLE_PATH") {
        info!(old = ?config.table_path, new = ?val, "Overriding table path via ENV");
        config.table_path = val;
    }
    if let Some(val) = lookup("BIDMATRIX_RESPONSE_FORMAT") {
        let format: ResponseFormat = val.parse().map_err(InfrastructureError::ConfigError)?;
        info!(old = %config.response_format, new = %format, "Overriding response format via ENV");
        config.response_format = format;
    }
    if let Some(val) = lookup("BIDMATRIX_MODEL_PROVIDER") {
        let provider: ModelProvider = val.parse().map_err(InfrastructureError::ConfigError)?;
        info!(old = ?config.model.provider, new = ?provider, "Overriding model provider via ENV");
        config.model.provider = provider;
    }
    if let Some(val) = lookup("AWS_DEFAULT_REGION") {
        info!(old = ?config.model.region, new = ?val, "Overriding region via ENV");
        config.model.region = val;
    }
    if let Some(val) = lookup("BEDROCK_MODEL_ID") {
        info!(old = ?config.model.model_id, new = ?val, "Overriding model id via ENV");
        config.model.model_id = val;
    }
    Ok(())
}
