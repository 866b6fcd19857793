use crate::domain::parsing::ResponseFormat;
use crate::error::BidMatrixError;
use crate::ports::PromptKind;

/// Turns a prompt context into the text sent to the model.
///
/// Templates come in pairs per response format: the prompt decides the
/// shape of the answer, so it is versioned together with its parser.
pub trait TemplateEngine: Send + Sync {
    fn render_prompt(
        &self,
        format: ResponseFormat,
        kind: PromptKind,
        context: &serde_json::Value,
    ) -> Result<String, BidMatrixError>;
}
