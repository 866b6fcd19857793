// bidmatrix-core/src/application/testing.rs
//
// In-memory stand-ins for the ports, shared by the use case tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::context::{RunSettings, Workbench};
use crate::application::ports::TemplateEngine;
use crate::domain::matrix::EvaluationTable;
use crate::error::BidMatrixError;
use crate::ports::{CompletionRequest, Document, ModelCaller, TableStore, TextExtractor};

pub struct FixedText(pub String);

impl TextExtractor for FixedText {
    fn extract(&self, _document: &Document) -> Result<String, BidMatrixError> {
        Ok(self.0.clone())
    }
}

/// Answers every prompt with the same text and remembers what it was asked.
pub struct RecordingModel {
    response: String,
    seen: Mutex<Vec<String>>,
}

impl RecordingModel {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ModelCaller for RecordingModel {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BidMatrixError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.prompt.clone());
        }
        Ok(self.response.clone())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    table: Mutex<Option<EvaluationTable>>,
}

impl MemoryStore {
    pub fn with_table(table: EvaluationTable) -> Self {
        Self {
            table: Mutex::new(Some(table)),
        }
    }
}

impl TableStore for MemoryStore {
    fn load(&self) -> Result<Option<EvaluationTable>, BidMatrixError> {
        self.table
            .lock()
            .map(|table| table.clone())
            .map_err(|e| BidMatrixError::InternalError(e.to_string()))
    }

    fn save(&self, table: &EvaluationTable) -> Result<(), BidMatrixError> {
        let mut slot = self
            .table
            .lock()
            .map_err(|e| BidMatrixError::InternalError(e.to_string()))?;
        *slot = Some(table.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

pub struct Stubs {
    pub extractor: FixedText,
    pub model: RecordingModel,
}

impl Stubs {
    pub fn new(document_text: &str, response: &str) -> Self {
        Self {
            extractor: FixedText(document_text.to_string()),
            model: RecordingModel::new(response),
        }
    }

    pub fn workbench<'a>(
        &'a self,
        prompts: &'a dyn TemplateEngine,
        store: &'a dyn TableStore,
        settings: RunSettings,
    ) -> Workbench<'a> {
        Workbench {
            extractor: &self.extractor,
            model: &self.model,
            prompts,
            store,
            settings,
        }
    }
}
