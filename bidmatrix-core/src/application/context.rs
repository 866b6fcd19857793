// bidmatrix-core/src/application/context.rs

use crate::application::ports::TemplateEngine;
use crate::domain::parsing::ResponseFormat;
use crate::domain::project::ProjectConfig;
use crate::ports::{ModelCaller, TableStore, TextExtractor};

/// The knobs a pipeline run reads from configuration.
#[derive(Debug, Clone, Copy)]
pub struct RunSettings {
    pub response_format: ResponseFormat,
    pub max_tokens: u32,
    pub max_document_chars: usize,
}

impl From<&ProjectConfig> for RunSettings {
    fn from(config: &ProjectConfig) -> Self {
        Self {
            response_format: config.response_format,
            max_tokens: config.model.max_tokens,
            max_document_chars: config.max_document_chars,
        }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self::from(&ProjectConfig::default())
    }
}

/// Everything a pipeline run talks to, borrowed for the duration of the run.
pub struct Workbench<'a> {
    pub extractor: &'a dyn TextExtractor,
    pub model: &'a dyn ModelCaller,
    pub prompts: &'a dyn TemplateEngine,
    pub store: &'a dyn TableStore,
    pub settings: RunSettings,
}

/// Cuts `text` to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}
