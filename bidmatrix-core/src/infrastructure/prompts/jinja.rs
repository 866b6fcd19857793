// bidmatrix-core/src/infrastructure/prompts/jinja.rs

// Prompts are compiled into the binary: a response parser only works with
// the prompt that asked for its format, so they ship together.

use crate::application::ports::TemplateEngine;
use crate::domain::parsing::ResponseFormat;
use crate::error::BidMatrixError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::PromptKind;
use minijinja::Environment;

const TEMPLATES: [(&str, &str); 4] = [
    (
        "categorized/requirements",
        include_str!("templates/categorized/requirements.j2"),
    ),
    (
        "categorized/evaluation",
        include_str!("templates/categorized/evaluation.j2"),
    ),
    (
        "flat/requirements",
        include_str!("templates/flat/requirements.j2"),
    ),
    (
        "flat/evaluation",
        include_str!("templates/flat/evaluation.j2"),
    ),
];

pub struct PromptRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> PromptRenderer<'a> {
    pub fn new() -> Result<Self, InfrastructureError> {
        let mut env = Environment::new();
        // Missing context keys are bugs, not empty strings
        env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);

        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    pub fn template_name(format: ResponseFormat, kind: PromptKind) -> String {
        format!("{}/{}", format.as_str(), kind.as_str())
    }
}

impl<'a> TemplateEngine for PromptRenderer<'a> {
    fn render_prompt(
        &self,
        format: ResponseFormat,
        kind: PromptKind,
        context: &serde_json::Value,
    ) -> Result<String, BidMatrixError> {
        let name = Self::template_name(format, kind);
        self.env
            .get_template(&name)
            .and_then(|tmpl| tmpl.render(context))
            .map_err(|e| BidMatrixError::Infrastructure(InfrastructureError::TemplateError(e)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_requirements_prompt_embeds_document() -> Result<()> {
        let renderer = PromptRenderer::new()?;
        let prompt = renderer.render_prompt(
            ResponseFormat::Categorized,
            PromptKind::Requirements,
            &json!({ "rfp_text": "The county seeks a records management system." }),
        )?;

        assert!(prompt.contains("The county seeks a records management system."));
        assert!(prompt.contains("**Category Name**"));
        Ok(())
    }

    #[test]
    fn test_evaluation_prompt_numbers_requirements() -> Result<()> {
        let renderer = PromptRenderer::new()?;
        let prompt = renderer.render_prompt(
            ResponseFormat::Categorized,
            PromptKind::Evaluation,
            &json!({
                "vendor_name": "Acme",
                "requirements": ["Must support SSO", "Must provide 24/7 support"],
                "proposal_text": "We integrate with Okta.",
            }),
        )?;

        assert!(prompt.contains("from Acme"));
        assert!(prompt.contains("1. Must support SSO\n2. Must provide 24/7 support\n"));
        assert!(prompt.contains("Requirement <number>: <YES|NO|NOT SURE>"));
        Ok(())
    }

    #[test]
    fn test_flat_evaluation_asks_for_comma_list() -> Result<()> {
        let renderer = PromptRenderer::new()?;
        let prompt = renderer.render_prompt(
            ResponseFormat::Flat,
            PromptKind::Evaluation,
            &json!({
                "vendor_name": "Acme",
                "requirements": ["Must support SSO"],
                "proposal_text": "n/a",
            }),
        )?;

        assert!(prompt.contains("Yes,No,Yes,No,Yes"));
        Ok(())
    }

    #[test]
    fn test_missing_context_key_is_an_error() -> Result<()> {
        let renderer = PromptRenderer::new()?;
        let result = renderer.render_prompt(
            ResponseFormat::Flat,
            PromptKind::Requirements,
            &json!({}),
        );

        assert!(matches!(
            result,
            Err(BidMatrixError::Infrastructure(InfrastructureError::TemplateError(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_document_text_is_not_escaped() -> Result<()> {
        let renderer = PromptRenderer::new()?;
        let prompt = renderer.render_prompt(
            ResponseFormat::Flat,
            PromptKind::Requirements,
            &json!({ "rfp_text": "Budget < $50,000 & \"firm\"" }),
        )?;
        assert!(prompt.contains("Budget < $50,000 & \"firm\""));
        Ok(())
    }
}
