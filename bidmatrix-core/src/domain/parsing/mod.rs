// bidmatrix-core/src/domain/parsing/mod.rs
//
// Turns free-text model responses into matrix structure. Two response
// formats exist (a flat bullet list and a categorized one); both sit behind
// `ResponseParser` and are selected by `response-format` in the config.

pub mod evaluation;
pub mod price;
pub mod requirements;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::matrix::{Assessment, RequirementItem};

pub use evaluation::{EvaluationOutcome, evaluable_requirements, evaluate_response};
pub use price::{NO_PRICE_FOUND, extract_price};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// `**Category**` headings, bullets, and `Requirement N: VERDICT - rationale` lines.
    #[default]
    Categorized,
    /// Plain bullet list, and `Yes,No,...` verdicts without rationale.
    Flat,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Categorized => "categorized",
            Self::Flat => "flat",
        }
    }

    pub fn parser(self) -> &'static dyn ResponseParser {
        match self {
            Self::Categorized => &CategorizedParser,
            Self::Flat => &FlatParser,
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "categorized" | "v2" => Ok(Self::Categorized),
            "flat" | "v1" => Ok(Self::Flat),
            other => Err(format!(
                "unknown response format '{other}'. Expected one of: categorized, flat"
            )),
        }
    }
}

/// One versioned contract for both halves of the model conversation.
pub trait ResponseParser: Send + Sync {
    fn format(&self) -> ResponseFormat;

    /// Requirement Parser: model response -> ordered requirement items.
    fn parse_requirements(&self, response: &str) -> Vec<RequirementItem>;

    /// Primary verdict strategy. Returns one slot per entry of
    /// `requirements` (the evaluable ones, in prompt order).
    fn parse_verdicts(&self, response: &str, requirements: &[&str]) -> Vec<Option<Assessment>>;
}

pub struct CategorizedParser;

impl ResponseParser for CategorizedParser {
    fn format(&self) -> ResponseFormat {
        ResponseFormat::Categorized
    }

    fn parse_requirements(&self, response: &str) -> Vec<RequirementItem> {
        requirements::parse_categorized(response)
    }

    fn parse_verdicts(&self, response: &str, requirements: &[&str]) -> Vec<Option<Assessment>> {
        evaluation::bind_verdict_lines(response, requirements.len())
    }
}

pub struct FlatParser;

impl ResponseParser for FlatParser {
    fn format(&self) -> ResponseFormat {
        ResponseFormat::Flat
    }

    fn parse_requirements(&self, response: &str) -> Vec<RequirementItem> {
        requirements::parse_flat(response)
    }

    fn parse_verdicts(&self, response: &str, requirements: &[&str]) -> Vec<Option<Assessment>> {
        evaluation::bind_verdict_list(response, requirements.len())
    }
}
