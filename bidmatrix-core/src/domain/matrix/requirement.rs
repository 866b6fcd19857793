// bidmatrix-core/src/domain/matrix/requirement.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category markers are persisted as `--- Name ---`. The model marks categories
/// with `**Name**`; the two forms are deliberately different.
const MARKER_EDGE: &str = "---";

/// One row-unit of the evaluation matrix's leading column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum RequirementItem {
    /// Organizational row. Never scored, always `N/A`.
    Category(String),
    /// An evaluable obligation extracted from the RFP.
    Requirement(String),
}

impl RequirementItem {
    /// The text stored in the `Requirements` column.
    pub fn label(&self) -> String {
        match self {
            Self::Category(name) => format!("{MARKER_EDGE} {name} {MARKER_EDGE}"),
            Self::Requirement(text) => text.clone(),
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category(_))
    }
}

impl fmt::Display for RequirementItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returns the category name if `label` is a persisted category marker.
pub fn category_name(label: &str) -> Option<&str> {
    let inner = label
        .trim()
        .strip_prefix(MARKER_EDGE)?
        .strip_suffix(MARKER_EDGE)?
        .trim();
    (!inner.is_empty()).then_some(inner)
}

pub fn is_category_label(label: &str) -> bool {
    category_name(label).is_some()
}
