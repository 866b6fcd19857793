// bidmatrix-core/src/domain/parsing/price.rs

use regex::Regex;
use std::sync::LazyLock;

/// Sentinel stored in the price row when the response names no price.
pub const NO_PRICE_FOUND: &str = "No pricing information found";

// Longer keywords first: at equal start positions the regex prefers the
// earlier alternative.
#[allow(clippy::expect_used)] // literal pattern
static PRICE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(total project cost|implementation cost|annual fee|total cost|project cost|price|quote|amount):\s*(.*)$",
    )
    .expect("price pattern is valid")
});

/// Lines mentioning these are verdict or tally lines, not prices.
const EXCLUDED_KEYWORDS: [&str; 3] = ["requirement", "score", "verdict"];

/// First pricing line of the response wins.
pub fn extract_price(response: &str) -> String {
    for raw in response.lines() {
        let line = raw.replace("**", "");
        let line = line.trim();
        let lower = line.to_lowercase();
        if EXCLUDED_KEYWORDS.iter().any(|k| lower.contains(k)) {
            continue;
        }

        if let Some(caps) = PRICE_LINE.captures(line) {
            let value = caps
                .get(2)
                .map(|m| m.as_str().trim().trim_matches('*').trim())
                .unwrap_or_default();
            return if value.is_empty() {
                line.to_string()
            } else {
                value.to_string()
            };
        }
    }
    NO_PRICE_FOUND.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_project_cost() {
        let response = "Requirement 1: Yes - ok\n**Total Project Cost:** $250,000 over 3 years\nPrice: $1";
        assert_eq!(extract_price(response), "$250,000 over 3 years");
    }

    #[test]
    fn test_verdict_lines_are_skipped() {
        let response = "Requirement 4: No - price: not itemized\nScore amount: 3\nAnnual fee: $12,000";
        assert_eq!(extract_price(response), "$12,000");
    }

    #[test]
    fn test_keyword_without_value_keeps_line() {
        assert_eq!(extract_price("- Quote:"), "- Quote:");
    }

    #[test]
    fn test_no_price() {
        assert_eq!(extract_price("Requirement 1: Yes - fine"), NO_PRICE_FOUND);
        assert_eq!(extract_price(""), NO_PRICE_FOUND);
    }
}
