// bidmatrix/src/commands/analyze.rs
//
// USE CASE: RFP -> requirements -> fresh evaluation matrix.

use anyhow::Context;
use std::path::Path;

use bidmatrix_core::application::{RunSettings, Workbench, analyze_rfp, create_matrix};
use bidmatrix_core::infrastructure::adapters::{DocumentTextExtractor, model_from_config};
use bidmatrix_core::infrastructure::prompts::PromptRenderer;
use bidmatrix_core::ports::{Document, TableStore};

use super::Project;
use crate::display;

pub async fn execute(project_dir: &Path, rfp: &Path, preview: bool) -> anyhow::Result<()> {
    println!("⚙️  Loading configuration...");
    let project = Project::open(project_dir)?;

    println!("📄 Reading RFP: {}", rfp.display());
    let document = Document::read(rfp)
        .with_context(|| format!("Failed to read RFP at {}", rfp.display()))?;

    let model = model_from_config(&project.config, &project.dir).await;
    let prompts = PromptRenderer::new()?;
    let ctx = Workbench {
        extractor: &DocumentTextExtractor,
        model: model.as_ref(),
        prompts: &prompts,
        store: &project.store,
        settings: RunSettings::from(&project.config),
    };

    println!("🧠 Extracting requirements ({} format)...", ctx.settings.response_format);
    let report = analyze_rfp(&ctx, &document).await?;

    if preview {
        println!("\n--- Extracted text ({} chars) ---", report.document_chars);
        println!("{}", report.preview);
        println!("---");
    }
    if report.truncated {
        println!(
            "   ⚠️  Only the first {} characters were sent to the model.",
            project.config.max_document_chars
        );
    }

    create_matrix(&project.store, &report.items)?;

    println!("{}", display::requirements_table(&report.items));
    println!(
        "✨ {} requirements in {} categories written to {}",
        report.requirement_count(),
        report.category_count(),
        project.store.location()
    );

    Ok(())
}
