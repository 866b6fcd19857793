// bidmatrix-core/src/domain/project/configuration.rs

use crate::domain::parsing::ResponseFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

/// Which model collaborator answers the prompts.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    #[default]
    Bedrock,
    /// Canned responses read from disk, one file per prompt kind.
    Replay,
}

impl std::str::FromStr for ModelProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bedrock" => Ok(Self::Bedrock),
            "replay" => Ok(Self::Replay),
            other => Err(format!(
                "unknown model provider '{other}' (expected 'bedrock' or 'replay')"
            )),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(rename = "table-path", default = "default_table_path")]
    #[validate(length(min = 1))]
    pub table_path: String,

    #[serde(rename = "response-format", default)]
    pub response_format: ResponseFormat,

    #[serde(rename = "max-document-chars", default = "default_max_document_chars")]
    #[validate(range(min = 1_000))]
    pub max_document_chars: usize,

    #[serde(default)]
    #[validate(nested)]
    pub model: ModelConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ModelConfig {
    #[serde(default)]
    pub provider: ModelProvider,

    #[serde(default = "default_region")]
    #[validate(length(min = 1))]
    pub region: String,

    #[serde(rename = "model-id", default = "default_model_id")]
    #[validate(length(min = 1))]
    pub model_id: String,

    #[serde(rename = "max-tokens", default = "default_max_tokens")]
    #[validate(range(min = 1, max = 200_000))]
    pub max_tokens: u32,

    #[serde(rename = "replay-dir", default = "default_replay_dir")]
    pub replay_dir: String,
}

impl ProjectConfig {
    /// Matrix location; relative paths hang off the project directory.
    pub fn table_path_in(&self, project_dir: &Path) -> PathBuf {
        resolve(project_dir, &self.table_path)
    }
}

impl ModelConfig {
    pub fn replay_dir_in(&self, project_dir: &Path) -> PathBuf {
        resolve(project_dir, &self.replay_dir)
    }
}

fn resolve(project_dir: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_dir.join(path)
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            table_path: default_table_path(),
            response_format: ResponseFormat::default(),
            max_document_chars: default_max_document_chars(),
            model: ModelConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: ModelProvider::default(),
            region: default_region(),
            model_id: default_model_id(),
            max_tokens: default_max_tokens(),
            replay_dir: default_replay_dir(),
        }
    }
}

fn default_name() -> String {
    "bidmatrix".to_string()
}
fn default_table_path() -> String {
    "evaluation_matrix.csv".to_string()
}
fn default_max_document_chars() -> usize {
    100_000
}
fn default_region() -> String {
    "us-west-2".to_string()
}
fn default_model_id() -> String {
    "anthropic.claude-3-5-sonnet-20241022-v2:0".to_string()
}
fn default_max_tokens() -> u32 {
    4000
}
fn default_replay_dir() -> String {
    "responses".to_string()
}
