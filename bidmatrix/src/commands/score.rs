// bidmatrix/src/commands/score.rs
//
// USE CASE: proposal -> verdicts, price and score -> vendor column.

use anyhow::Context;
use std::path::Path;

use bidmatrix_core::application::{RunSettings, Workbench, score_proposal};
use bidmatrix_core::domain::parsing::evaluation::BindingStrategy;
use bidmatrix_core::infrastructure::adapters::{DocumentTextExtractor, model_from_config};
use bidmatrix_core::infrastructure::prompts::PromptRenderer;
use bidmatrix_core::ports::{Document, TableStore};

use super::Project;
use crate::display;

pub async fn execute(project_dir: &Path, proposal: &Path, vendor: &str) -> anyhow::Result<()> {
    println!("⚙️  Loading configuration...");
    let project = Project::open(project_dir)?;

    println!("📄 Reading proposal: {}", proposal.display());
    let document = Document::read(proposal)
        .with_context(|| format!("Failed to read proposal at {}", proposal.display()))?;

    let model = model_from_config(&project.config, &project.dir).await;
    let prompts = PromptRenderer::new()?;
    let ctx = Workbench {
        extractor: &DocumentTextExtractor,
        model: model.as_ref(),
        prompts: &prompts,
        store: &project.store,
        settings: RunSettings::from(&project.config),
    };

    println!("⚖️  Evaluating '{}'...", vendor.trim());
    let report = score_proposal(&ctx, &document, vendor)
        .await
        .with_context(|| format!("Scoring '{}' failed", vendor.trim()))?;
    let outcome = &report.outcome;

    if outcome.strategy == BindingStrategy::Fallback {
        println!("   ⚠️  The model did not answer in the expected format; verdicts were inferred.");
    }
    if report.truncated {
        println!(
            "   ⚠️  Only the first {} characters were sent to the model.",
            project.config.max_document_chars
        );
    }

    println!("{}", display::outcome_table(outcome));
    println!("💰 Price: {}", outcome.price);
    println!("📈 {}", outcome.summary);

    let verb = if report.replaced_existing {
        "updated in"
    } else {
        "added to"
    };
    println!(
        "✨ Column '{}' {} {}",
        outcome.vendor,
        verb,
        project.store.location()
    );

    Ok(())
}
