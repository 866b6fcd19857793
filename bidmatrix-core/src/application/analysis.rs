// bidmatrix-core/src/application/analysis.rs

use serde_json::json;
use tracing::{info, instrument, warn};

use crate::application::context::{Workbench, truncate_chars};
use crate::domain::error::DomainError;
use crate::domain::matrix::{EvaluationTable, RequirementItem};
use crate::error::BidMatrixError;
use crate::ports::{CompletionRequest, Document, PromptKind, TableStore};

const PREVIEW_CHARS: usize = 500;

/// What the extraction pipeline learned from one RFP.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub document: String,
    pub document_chars: usize,
    pub truncated: bool,
    /// Start of the extracted text, for a quick sanity check.
    pub preview: String,
    pub items: Vec<RequirementItem>,
    pub raw_response: String,
}

impl AnalysisReport {
    pub fn requirement_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_category()).count()
    }

    pub fn category_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_category()).count()
    }
}

/// Requirement Extraction Pipeline: RFP document -> categorized requirements.
///
/// Does not touch the table; see [`create_matrix`].
#[instrument(skip_all, fields(document = %document.name, format = %ctx.settings.response_format))]
pub async fn analyze_rfp(
    ctx: &Workbench<'_>,
    document: &Document,
) -> Result<AnalysisReport, BidMatrixError> {
    let text = ctx.extractor.extract(document)?;
    let document_chars = text.chars().count();

    let (body, truncated) = truncate_chars(&text, ctx.settings.max_document_chars);
    if truncated {
        warn!(
            chars = document_chars,
            limit = ctx.settings.max_document_chars,
            "RFP text truncated before prompting"
        );
    }

    let format = ctx.settings.response_format;
    let prompt = ctx
        .prompts
        .render_prompt(format, PromptKind::Requirements, &json!({ "rfp_text": body }))?;

    let raw_response = ctx
        .model
        .complete(&CompletionRequest {
            kind: PromptKind::Requirements,
            prompt,
            max_tokens: ctx.settings.max_tokens,
        })
        .await?;

    let items = format.parser().parse_requirements(&raw_response);
    if !items.iter().any(|item| !item.is_category()) {
        return Err(DomainError::NothingExtracted {
            what: "requirements".to_string(),
        }
        .into());
    }

    let report = AnalysisReport {
        document: document.name.clone(),
        document_chars,
        truncated,
        preview: truncate_chars(&text, PREVIEW_CHARS).0.to_string(),
        items,
        raw_response,
    };
    info!(
        requirements = report.requirement_count(),
        categories = report.category_count(),
        "Requirements extracted"
    );
    Ok(report)
}

/// `CreateTable`: writes a fresh matrix holding only the requirement column.
///
/// An existing matrix is replaced, vendor columns included.
#[instrument(skip_all, fields(store = %store.location()))]
pub fn create_matrix(
    store: &dyn TableStore,
    items: &[RequirementItem],
) -> Result<EvaluationTable, BidMatrixError> {
    if let Some(previous) = store.load()?
        && !previous.vendors().is_empty()
    {
        warn!(
            vendors = previous.vendors().len(),
            "Replacing a matrix that already holds vendor scores"
        );
    }

    let table = EvaluationTable::from_requirements(items);
    store.save(&table)?;
    Ok(table)
}
