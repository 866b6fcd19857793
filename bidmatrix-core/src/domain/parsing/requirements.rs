// bidmatrix-core/src/domain/parsing/requirements.rs

use crate::domain::matrix::RequirementItem;

const BULLET_GLYPHS: [char; 3] = ['-', '•', '*'];

/// Bullet bodies must be longer than this (chars) to count.
const MIN_BULLET_CHARS: usize = 10;
/// Unbulleted lines must be longer than this (chars) to count.
const MIN_PLAIN_CHARS: usize = 15;

/// Lines the model copies back from the prompt instead of answering.
const INSTRUCTION_PREFIXES: [&str; 4] = ["Please", "Provide", "Example:", "Focus on"];

/// Flat-format preamble lines.
const FLAT_SKIP_PREFIXES: [&str; 3] = ["Requirements", "Here", "Please"];
const MIN_FLAT_CHARS: usize = 10;

/// Categorized format. Requirements are only kept under a `**Category**`
/// heading; anything before the first heading is dropped.
pub fn parse_categorized(response: &str) -> Vec<RequirementItem> {
    let mut categories: Vec<(String, Vec<String>)> = Vec::new();
    let mut current: Option<usize> = None;

    for raw in response.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = category_heading(line) {
            let idx = match categories.iter().position(|(existing, _)| *existing == name) {
                Some(idx) => idx,
                None => {
                    categories.push((name, Vec::new()));
                    categories.len() - 1
                }
            };
            current = Some(idx);
            continue;
        }

        let Some(idx) = current else {
            continue;
        };

        let candidate = match strip_bullet(line) {
            Some(body) => (body.chars().count() > MIN_BULLET_CHARS).then_some(body),
            None => (line.chars().count() > MIN_PLAIN_CHARS && !is_instruction(line))
                .then_some(line),
        };

        if let Some(text) = candidate {
            categories[idx].1.push(text.to_string());
        }
    }

    categories
        .into_iter()
        .filter(|(_, requirements)| !requirements.is_empty())
        .flat_map(|(name, requirements)| {
            std::iter::once(RequirementItem::Category(name))
                .chain(requirements.into_iter().map(RequirementItem::Requirement))
        })
        .collect()
}

/// Flat format: every bullet, plus long-enough prose lines.
pub fn parse_flat(response: &str) -> Vec<RequirementItem> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match strip_bullet(line) {
            Some(body) => (!body.is_empty()).then_some(body),
            None => {
                let skipped = FLAT_SKIP_PREFIXES.iter().any(|p| line.starts_with(p));
                (!skipped && line.chars().count() > MIN_FLAT_CHARS).then_some(line)
            }
        })
        .map(|text| RequirementItem::Requirement(text.to_string()))
        .collect()
}

/// `**Security Requirements**` or `**Security Requirements:**` -> name.
fn category_heading(line: &str) -> Option<String> {
    let inner = line
        .trim_end_matches(':')
        .strip_prefix("**")?
        .strip_suffix("**")?;
    let name = inner.trim().trim_end_matches(':').trim();
    if name.is_empty() || name.contains("**") {
        return None;
    }
    Some(name.to_string())
}

fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLET_GLYPHS).map(str::trim)
}

fn is_instruction(line: &str) -> bool {
    INSTRUCTION_PREFIXES.iter().any(|p| line.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use RequirementItem::{Category, Requirement};

    const CATEGORIZED: &str = "\
Here are the requirements I found:

**Functional Requirements**
- Must support single sign-on (SSO) with SAML 2.0
- Must provide REST API for integration
• Must support multi-tenant architecture

**Security Requirements:**
* Data must be encrypted at rest using AES-256
- Too short
Must provide audit logging for all user actions
Please review the list above carefully.

**Pricing**

**Support Requirements**
- Must provide 24/7 technical support via phone and email
";

    #[test]
    fn test_categorized_order_and_markers() {
        let items = parse_categorized(CATEGORIZED);
        assert_eq!(
            items,
            vec![
                Category("Functional Requirements".into()),
                Requirement("Must support single sign-on (SSO) with SAML 2.0".into()),
                Requirement("Must provide REST API for integration".into()),
                Requirement("Must support multi-tenant architecture".into()),
                Category("Security Requirements".into()),
                Requirement("Data must be encrypted at rest using AES-256".into()),
                Requirement("Must provide audit logging for all user actions".into()),
                Category("Support Requirements".into()),
                Requirement("Must provide 24/7 technical support via phone and email".into()),
            ]
        );
    }

    #[test]
    fn test_instruction_lines_under_a_category_are_skipped() {
        let response = "\
**Integration Requirements**
Provide each requirement as a separate line.
Example: Must support SSO via SAML 2.0
Focus on the technical capabilities requested.
Must expose webhooks for order status changes
";
        let items = parse_categorized(response);
        assert_eq!(
            items,
            vec![
                Category("Integration Requirements".into()),
                Requirement("Must expose webhooks for order status changes".into()),
            ]
        );
    }

    #[test]
    fn test_bullets_without_category_are_dropped() {
        let items = parse_categorized("- Must support SSO via SAML\n- Must provide REST API\n");
        assert!(items.is_empty());
    }

    #[test]
    fn test_empty_response() {
        assert!(parse_categorized("").is_empty());
        assert!(parse_flat("   \n").is_empty());
    }

    #[test]
    fn test_repeated_category_continues() {
        let response = "\
**Security**
- Must support role-based access control
**Support**
- Must offer training and documentation
**Security**
- Must comply with SOC 2 Type II standards
";
        let items = parse_categorized(response);
        assert_eq!(items[0], Category("Security".into()));
        assert_eq!(
            items[2],
            Requirement("Must comply with SOC 2 Type II standards".into())
        );
        assert_eq!(items[3], Category("Support".into()));
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn test_flat_format() {
        let response = "\
Requirements extracted from the RFP:
- Must support SSO
* Must provide REST API
Must be deployable on-premise or in the cloud
Here is some closing remark that is long
short
";
        let items = parse_flat(response);
        assert_eq!(
            items,
            vec![
                Requirement("Must support SSO".into()),
                Requirement("Must provide REST API".into()),
                Requirement("Must be deployable on-premise or in the cloud".into()),
            ]
        );
    }
}
