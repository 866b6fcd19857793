// bidmatrix-core/src/domain/matrix/verdict.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell value for rows that are never scored (category markers, boilerplate).
pub const NOT_APPLICABLE: &str = "N/A";

/// Rationale used when the model's response says nothing about a requirement.
pub const NO_INFORMATION_RATIONALE: &str = "No information found in proposal";

/// Rationale used when the model gave a verdict without explanation.
pub const NO_RATIONALE: &str = "No rationale provided";

/// Unit evaluation result for one vendor against one requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Yes,
    No,
    NotSure,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::NotSure => "Not Sure",
        }
    }

    /// Interprets a free-text verdict token from a model response.
    ///
    /// Exact (case-insensitive, punctuation-insensitive) matches on `YES`,
    /// `NO` and `NOT SURE` win. Otherwise the token is searched for `yes`,
    /// then `sure`, then `no`; anything else is `NotSure`.
    pub fn from_token(token: &str) -> Self {
        let normalized = normalize_token(token);
        match normalized.as_str() {
            "YES" => return Self::Yes,
            "NO" => return Self::No,
            "NOT SURE" => return Self::NotSure,
            _ => {}
        }

        let lower = normalized.to_lowercase();
        if lower.contains("yes") {
            Self::Yes
        } else if lower.contains("sure") {
            Self::NotSure
        } else if lower.contains("no") {
            Self::No
        } else {
            Self::NotSure
        }
    }

    /// Reads the leading verdict word of a rendered cell (`"Yes - ..."`).
    /// `N/A`, prices and blank cells yield `None`.
    pub fn from_cell(cell: &str) -> Option<Self> {
        let head = cell.split(" - ").next().unwrap_or_default().trim();
        if head.eq_ignore_ascii_case("yes") {
            Some(Self::Yes)
        } else if head.eq_ignore_ascii_case("not sure") {
            Some(Self::NotSure)
        } else if head.eq_ignore_ascii_case("no") {
            Some(Self::No)
        } else {
            None
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// A verdict with its rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub rationale: String,
}

impl Assessment {
    pub fn new(verdict: Verdict, rationale: impl Into<String>) -> Self {
        let rationale = rationale.into();
        let rationale = if rationale.trim().is_empty() {
            NO_RATIONALE.to_string()
        } else {
            rationale.trim().to_string()
        };
        Self { verdict, rationale }
    }

    /// The verdict assigned to a requirement the response never mentions.
    pub fn unresolved() -> Self {
        Self::new(Verdict::No, NO_INFORMATION_RATIONALE)
    }

    /// Rendered cell form: `"<Verdict> - <rationale>"`.
    pub fn render(&self) -> String {
        format!("{} - {}", self.verdict, self.rationale)
    }
}
