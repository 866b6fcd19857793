pub mod project;

pub use crate::domain::project::ProjectConfig;
pub use project::{apply_env_overrides, load_project_config};
