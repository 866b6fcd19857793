// bidmatrix-core/src/ports/model.rs

use crate::error::BidMatrixError;
use async_trait::async_trait;
use std::fmt;

/// Which half of the conversation a prompt belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    Requirements,
    Evaluation,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requirements => "requirements",
            Self::Evaluation => "evaluation",
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub kind: PromptKind,
    pub prompt: String,
    pub max_tokens: u32,
}

/// A hosted language model. No structure is guaranteed in the reply.
#[async_trait]
pub trait ModelCaller: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BidMatrixError>;
}
