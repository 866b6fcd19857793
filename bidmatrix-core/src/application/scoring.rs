// bidmatrix-core/src/application/scoring.rs

use serde_json::json;
use tracing::{info, instrument, warn};

use crate::application::context::{Workbench, truncate_chars};
use crate::domain::error::DomainError;
use crate::domain::matrix::EvaluationTable;
use crate::domain::matrix::table::validate_vendor_name;
use crate::domain::parsing::evaluation::BindingStrategy;
use crate::domain::parsing::{EvaluationOutcome, evaluable_requirements, evaluate_response};
use crate::error::BidMatrixError;
use crate::ports::{CompletionRequest, Document, PromptKind};

#[derive(Debug, Clone)]
pub struct ScoringReport {
    pub outcome: EvaluationOutcome,
    /// The matrix as saved, with the vendor's column merged in.
    pub table: EvaluationTable,
    /// The vendor already had a column, which was overwritten.
    pub replaced_existing: bool,
    pub truncated: bool,
}

/// Vendor Scoring Pipeline: proposal -> verdicts, price and score, merged
/// into the matrix as the vendor's column.
///
/// Cheap checks (vendor name, matrix present, something to score) run
/// before the document is read or the model is called.
#[instrument(skip_all, fields(document = %document.name, vendor = %vendor_name))]
pub async fn score_proposal(
    ctx: &Workbench<'_>,
    document: &Document,
    vendor_name: &str,
) -> Result<ScoringReport, BidMatrixError> {
    let vendor = validate_vendor_name(vendor_name)?;

    let mut table = ctx
        .store
        .load()?
        .ok_or_else(|| DomainError::TableNotFound(ctx.store.location()))?;

    let requirements = table.requirement_labels();
    let actual = evaluable_requirements(&requirements);
    if actual.is_empty() {
        return Err(DomainError::NothingExtracted {
            what: "requirements in the evaluation matrix".to_string(),
        }
        .into());
    }

    let text = ctx.extractor.extract(document)?;
    let (body, truncated) = truncate_chars(&text, ctx.settings.max_document_chars);
    if truncated {
        warn!(
            chars = text.chars().count(),
            limit = ctx.settings.max_document_chars,
            "Proposal text truncated before prompting"
        );
    }

    let format = ctx.settings.response_format;
    let prompt = ctx.prompts.render_prompt(
        format,
        PromptKind::Evaluation,
        &json!({
            "vendor_name": vendor,
            "requirements": actual,
            "proposal_text": body,
        }),
    )?;

    let response = ctx
        .model
        .complete(&CompletionRequest {
            kind: PromptKind::Evaluation,
            prompt,
            max_tokens: ctx.settings.max_tokens,
        })
        .await?;

    let outcome = evaluate_response(format.parser(), &response, &requirements, &vendor);
    if outcome.resolved == 0 {
        // A refusal or an empty reply must not become a 0/N column on disk
        return Err(DomainError::NothingExtracted {
            what: "verdicts".to_string(),
        }
        .into());
    }
    if outcome.strategy == BindingStrategy::Fallback {
        warn!(
            resolved = outcome.resolved,
            expected = actual.len(),
            "No verdict lines in the response, verdicts inferred from mentions"
        );
    }

    let replaced_existing = table.has_vendor(&vendor);
    table.merge_column(&outcome.to_column());
    ctx.store.save(&table)?;

    info!(
        yes = outcome.summary.yes_count,
        no = outcome.summary.no_count,
        not_sure = outcome.summary.not_sure_count,
        score = outcome.summary.score(),
        replaced_existing,
        "Vendor scored"
    );

    Ok(ScoringReport {
        outcome,
        table,
        replaced_existing,
        truncated,
    })
}
