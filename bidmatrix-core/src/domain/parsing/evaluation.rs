// bidmatrix-core/src/domain/parsing/evaluation.rs

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::domain::matrix::requirement::is_category_label;
use crate::domain::matrix::table::{PRICE_ROW, SCORE_ROW, VendorColumn, is_trailer_label};
use crate::domain::matrix::verdict::NOT_APPLICABLE;
use crate::domain::matrix::{Assessment, ScoreSummary, Verdict};
use crate::domain::parsing::ResponseParser;
use crate::domain::parsing::price::extract_price;

/// Characters inspected after a requirement's mention in the fallback scan.
const FALLBACK_WINDOW_CHARS: usize = 200;

/// Verdict tokens longer than this are prose, not verdicts.
const MAX_VERDICT_TOKEN_CHARS: usize = 24;

const FALLBACK_RATIONALE: &str = "Inferred from the model's discussion of this requirement";
const FLAT_RATIONALE: &str = "Reported without rationale";

/// Leading phrases of rows that are commentary rather than obligations.
const BOILERPLATE_PREFIXES: [&str; 5] = ["here are", "here is", "the following", "please", "note:"];

// "Requirement 3", "Req. 3", "#3", "3", or an enumerated "3. Must ...".
#[allow(clippy::expect_used)] // literal pattern
static REFERENCE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:requirement|req\.?|item)\s*#?\s*|#\s*)?(\d{1,4})(?:[.)]?$|[.)]\s)")
        .expect("reference pattern is valid")
});

#[allow(clippy::expect_used)] // literal pattern
static YES_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\byes\b").expect("yes pattern is valid"));

#[allow(clippy::expect_used)] // literal pattern
static NO_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bno\b").expect("no pattern is valid"));

#[allow(clippy::expect_used)] // literal pattern
static NOT_SURE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnot\s+sure\b").expect("not sure pattern is valid"));

/// Which strategy produced the verdicts of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStrategy {
    /// Verdict lines (or the flat verdict list) were found.
    Primary,
    /// No verdict lines; verdicts were inferred from mentions of each requirement.
    Fallback,
}

/// Everything one scoring run produces for one vendor.
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    pub vendor: String,
    /// One cell per input requirement label, in input order.
    pub cells: Vec<(String, String)>,
    pub price: String,
    pub summary: ScoreSummary,
    pub raw_response: String,
    pub strategy: BindingStrategy,
    /// How many evaluable requirements got a verdict from the response.
    pub resolved: usize,
}

impl EvaluationOutcome {
    /// The column to merge into the matrix: requirement cells, then the
    /// price and score trailers.
    pub fn to_column(&self) -> VendorColumn {
        let mut cells = self.cells.clone();
        cells.push((PRICE_ROW.to_string(), self.price.clone()));
        cells.push((SCORE_ROW.to_string(), self.summary.to_string()));
        VendorColumn {
            vendor: self.vendor.clone(),
            cells,
        }
    }
}

/// Rows that receive a verdict: no category markers, trailers or boilerplate.
pub fn evaluable_requirements(requirements: &[String]) -> Vec<&str> {
    requirements
        .iter()
        .map(String::as_str)
        .filter(|label| is_evaluable(label))
        .collect()
}

fn is_evaluable(label: &str) -> bool {
    let trimmed = label.trim();
    if trimmed.is_empty() || is_category_label(trimmed) || is_trailer_label(trimmed) {
        return false;
    }
    let lower = trimmed.to_lowercase();
    !BOILERPLATE_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Evaluation Parser: binds the response to the requirement list and
/// assembles the vendor's cells, price and recomputed score.
pub fn evaluate_response(
    parser: &dyn ResponseParser,
    response: &str,
    requirements: &[String],
    vendor: &str,
) -> EvaluationOutcome {
    let actual = evaluable_requirements(requirements);

    let mut strategy = BindingStrategy::Primary;
    let mut slots = parser.parse_verdicts(response, &actual);
    if slots.iter().all(Option::is_none) {
        debug!(
            vendor,
            format = %parser.format(),
            "No verdict lines found, inferring from requirement mentions"
        );
        strategy = BindingStrategy::Fallback;
        slots = infer_from_mentions(response, &actual);
    }
    let resolved = slots.iter().filter(|s| s.is_some()).count();

    let mut slots = slots.into_iter();
    let cells: Vec<(String, String)> = requirements
        .iter()
        .map(|label| {
            let cell = if is_evaluable(label) {
                slots
                    .next()
                    .flatten()
                    .unwrap_or_else(Assessment::unresolved)
                    .render()
            } else {
                NOT_APPLICABLE.to_string()
            };
            (label.clone(), cell)
        })
        .collect();

    let summary = ScoreSummary::from_cells(cells.iter().map(|(_, cell)| cell.as_str()));

    EvaluationOutcome {
        vendor: vendor.to_string(),
        cells,
        price: extract_price(response),
        summary,
        raw_response: response.to_string(),
        strategy,
        resolved,
    }
}

/// A `<reference>: <VERDICT> - <rationale>` line.
#[derive(Debug, PartialEq)]
struct VerdictLine {
    number: Option<usize>,
    assessment: Assessment,
}

fn parse_verdict_line(raw: &str) -> Option<VerdictLine> {
    let line = raw.replace("**", "");
    let line = line.trim().trim_start_matches(['-', '•', '*']).trim();

    let (reference, rest) = line.split_once(':')?;
    let reference = reference.trim();
    let rest = rest.trim();
    if reference.is_empty() || rest.is_empty() {
        return None;
    }

    let (token, rationale) = match rest.find(['-', '–', '—']) {
        Some(pos) => {
            let dash_len = rest[pos..].chars().next().map(char::len_utf8).unwrap_or(1);
            (rest[..pos].trim(), rest[pos + dash_len..].trim())
        }
        None => (rest, ""),
    };

    if token.is_empty()
        || token.chars().count() > MAX_VERDICT_TOKEN_CHARS
        || token.chars().any(|c| c.is_ascii_digit())
    {
        return None;
    }

    let number = REFERENCE_NUMBER
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<usize>().ok());

    let lower = token.to_lowercase();
    let mentions_verdict = lower.contains("yes") || lower.contains("no") || lower.contains("sure");
    if number.is_none() && !mentions_verdict {
        return None;
    }

    Some(VerdictLine {
        number,
        assessment: Assessment::new(Verdict::from_token(token), rationale),
    })
}

/// Categorized primary strategy.
///
/// When the response numbers its verdicts, only numbered lines bind, each to
/// its requirement (1-based). Otherwise lines bind in order of appearance.
pub(crate) fn bind_verdict_lines(response: &str, count: usize) -> Vec<Option<Assessment>> {
    let mut slots: Vec<Option<Assessment>> = vec![None; count];
    let lines: Vec<VerdictLine> = response.lines().filter_map(parse_verdict_line).collect();

    let in_range = |line: &VerdictLine| line.number.filter(|n| (1..=count).contains(n));

    if lines.iter().any(|line| in_range(line).is_some()) {
        for line in lines {
            match in_range(&line) {
                Some(n) if slots[n - 1].is_none() => slots[n - 1] = Some(line.assessment),
                _ => debug!(number = ?line.number, "Verdict line ignored in a numbered response"),
            }
        }
    } else {
        for (slot, line) in slots.iter_mut().zip(lines) {
            *slot = Some(line.assessment);
        }
    }
    slots
}

/// Flat primary strategy: `Yes,No,...` tokens bound by position.
///
/// Every part of a comma-separated line keeps its position, so an answer
/// like `Partially` cannot shift later verdicts. A line without commas only
/// counts when it is a bare verdict. Lines with a colon (preambles, prices)
/// are skipped.
pub(crate) fn bind_verdict_list(response: &str, count: usize) -> Vec<Option<Assessment>> {
    let tokens: Vec<Verdict> = response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains(':'))
        .flat_map(|line| {
            let listed = line.contains(',');
            line.split(',')
                .map(|part| part.trim().trim_matches(|c: char| !c.is_alphanumeric()))
                .filter(|part| !part.is_empty())
                .filter(move |part| listed || is_bare_verdict(part))
                .collect::<Vec<_>>()
        })
        .map(Verdict::from_token)
        .collect();

    (0..count)
        .map(|i| tokens.get(i).map(|v| Assessment::new(*v, FLAT_RATIONALE)))
        .collect()
}

fn is_bare_verdict(token: &str) -> bool {
    matches!(token.to_uppercase().as_str(), "YES" | "NO" | "NOT SURE")
}

/// Fallback strategy: look for each requirement's text in the response and
/// read the verdict words that follow it.
fn infer_from_mentions(response: &str, requirements: &[&str]) -> Vec<Option<Assessment>> {
    let haystack = response.to_lowercase();

    requirements
        .iter()
        .map(|requirement| {
            let needle = requirement.trim().to_lowercase();
            if needle.is_empty() {
                return None;
            }
            let start = haystack.find(&needle)?;
            let end = start + needle.len();
            let tail = &haystack[end..];
            let window_end = tail
                .char_indices()
                .nth(FALLBACK_WINDOW_CHARS)
                .map(|(i, _)| i)
                .unwrap_or(tail.len());
            let window = &tail[..window_end];

            let says_yes = YES_WORD.is_match(window);
            let says_no = NO_WORD.is_match(window);
            let verdict = if NOT_SURE_WORDS.is_match(window) {
                Verdict::NotSure
            } else {
                match (says_yes, says_no) {
                    (true, false) => Verdict::Yes,
                    (false, true) => Verdict::No,
                    _ => Verdict::NotSure,
                }
            };
            Some(Assessment::new(verdict, FALLBACK_RATIONALE))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matrix::verdict::NO_INFORMATION_RATIONALE;
    use crate::domain::parsing::ResponseFormat;

    fn reqs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn cell<'a>(outcome: &'a EvaluationOutcome, label: &str) -> &'a str {
        outcome
            .cells
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| c.as_str())
            .unwrap_or_default()
    }

    fn assert_consistent(outcome: &EvaluationOutcome) {
        let rescanned = ScoreSummary::from_cells(outcome.cells.iter().map(|(_, c)| c.as_str()));
        assert_eq!(rescanned, outcome.summary);
        let s = outcome.summary;
        assert_eq!(s.yes_count + s.no_count + s.not_sure_count, s.total());
        assert!((s.score() - (s.yes_count as f64 + 0.5 * s.not_sure_count as f64)).abs() < 1e-9);
    }

    #[test]
    fn test_numbered_verdict_lines() {
        let requirements = reqs(&["Must support SSO", "Must provide REST API"]);
        let response =
            "Requirement 1: Yes - SSO via SAML is supported.\nRequirement 2: No - No API mentioned.";
        let outcome = evaluate_response(
            ResponseFormat::Categorized.parser(),
            response,
            &requirements,
            "Acme",
        );

        assert_eq!(outcome.cells.len(), 2);
        assert_eq!(cell(&outcome, "Must support SSO"), "Yes - SSO via SAML is supported.");
        assert_eq!(cell(&outcome, "Must provide REST API"), "No - No API mentioned.");
        assert_eq!(outcome.summary.yes_count, 1);
        assert_eq!(outcome.summary.no_count, 1);
        assert_eq!(outcome.summary.not_sure_count, 0);
        assert_eq!(outcome.summary.total(), 2);
        assert!((outcome.summary.score() - 1.0).abs() < f64::EPSILON);
        assert_eq!(outcome.strategy, BindingStrategy::Primary);
        assert_consistent(&outcome);
    }

    #[test]
    fn test_markers_are_not_applicable_and_unparsed_default_to_no() {
        let requirements = reqs(&[
            "--- Security ---",
            "Must support SSO",
            "Must encrypt data at rest",
            "--- Support ---",
            "Must offer 24/7 support",
        ]);
        let response = "\
**Requirement 1**: YES - SAML 2.0 and OIDC.
Requirement 3: not sure - Support hours are unclear.
Total Score: 1.5/3";
        let outcome = evaluate_response(
            ResponseFormat::Categorized.parser(),
            response,
            &requirements,
            "Acme",
        );

        assert_eq!(cell(&outcome, "--- Security ---"), "N/A");
        assert_eq!(cell(&outcome, "--- Support ---"), "N/A");
        assert_eq!(cell(&outcome, "Must support SSO"), "Yes - SAML 2.0 and OIDC.");
        assert_eq!(
            cell(&outcome, "Must encrypt data at rest"),
            format!("No - {NO_INFORMATION_RATIONALE}")
        );
        assert_eq!(
            cell(&outcome, "Must offer 24/7 support"),
            "Not Sure - Support hours are unclear."
        );
        assert_eq!(outcome.resolved, 2);
        assert_consistent(&outcome);
    }

    #[test]
    fn test_unnumbered_lines_bind_in_order() {
        let requirements = reqs(&["Must support SSO", "Must provide REST API", "Must log audits"]);
        let response = "\
- SSO: Yes - Supported through Okta.
- API: No - Not described.
- Audit: Maybe, it is vague - unclear";
        let slots = bind_verdict_lines(response, requirements.len());
        assert_eq!(slots[0].as_ref().map(|a| a.verdict), Some(Verdict::Yes));
        assert_eq!(slots[1].as_ref().map(|a| a.verdict), Some(Verdict::No));
        assert!(slots[2].is_none());
    }

    #[test]
    fn test_numbered_reference_survives_a_skipped_line() {
        let response = "Requirement 2: Yes - Documented.\nRequirement 3: No - Missing.";
        let slots = bind_verdict_lines(response, 3);
        assert!(slots[0].is_none());
        assert_eq!(slots[1].as_ref().map(|a| a.verdict), Some(Verdict::Yes));
        assert_eq!(slots[2].as_ref().map(|a| a.verdict), Some(Verdict::No));
    }

    #[test]
    fn test_unnumbered_chatter_cannot_steal_a_numbered_slot() {
        let response = "Vendor: Northwind Traders\nRequirement 1: Yes - ok\nRequirement 2: Yes - ok";
        let slots = bind_verdict_lines(response, 3);
        let verdicts: Vec<Option<Verdict>> =
            slots.iter().map(|s| s.as_ref().map(|a| a.verdict)).collect();
        assert_eq!(verdicts, vec![Some(Verdict::Yes), Some(Verdict::Yes), None]);
    }

    #[test]
    fn test_duplicate_numbered_line_keeps_first_answer() {
        let response = "Requirement 1: Yes - first\nRequirement 1: No - second";
        let slots = bind_verdict_lines(response, 2);
        assert_eq!(slots[0].as_ref().map(|a| a.verdict), Some(Verdict::Yes));
        assert!(slots[1].is_none());
    }

    #[test]
    fn test_reference_text_with_digits_is_not_a_number() {
        let line = parse_verdict_line("Must support SAML 2.0: Yes - fine");
        assert_eq!(line.map(|l| l.number), Some(None));
        let line = parse_verdict_line("3. Must support SAML: No - absent");
        assert_eq!(line.map(|l| l.number), Some(Some(3)));
    }

    #[test]
    fn test_price_and_tally_lines_are_not_verdicts() {
        assert!(parse_verdict_line("Total cost: $5,000 - one time").is_none());
        assert!(parse_verdict_line("Summary: Yes: 3, No: 1").is_none());
        assert!(parse_verdict_line("Overview: The vendor is a strong fit overall").is_none());
    }

    #[test]
    fn test_fallback_window() {
        let requirements = reqs(&["Must provide REST API", "Must support SSO", "Must log audits"]);
        let filler = "lorem ".repeat(50);
        let response = format!(
            "Regarding must provide REST API, the answer is No because only SOAP is offered. {filler}\n\
             On must support SSO, yes, Okta is integrated."
        );
        let outcome = evaluate_response(
            ResponseFormat::Categorized.parser(),
            &response,
            &requirements,
            "Acme",
        );

        assert_eq!(outcome.strategy, BindingStrategy::Fallback);
        assert!(cell(&outcome, "Must provide REST API").starts_with("No - "));
        assert!(cell(&outcome, "Must support SSO").starts_with("Yes - "));
        assert_eq!(
            cell(&outcome, "Must log audits"),
            "No - No information found in proposal"
        );
        assert_consistent(&outcome);
    }

    #[test]
    fn test_fallback_ambiguous_is_not_sure() {
        let slots = infer_from_mentions("must support sso - yes and no", &["Must support SSO"]);
        assert_eq!(slots[0].as_ref().map(|a| a.verdict), Some(Verdict::NotSure));
    }

    #[test]
    fn test_flat_verdict_list() {
        let requirements = reqs(&["Must support SSO", "Must provide REST API", "Must log audits"]);
        let outcome = evaluate_response(
            ResponseFormat::Flat.parser(),
            "Yes, No\nPrice: $4,000",
            &requirements,
            "Acme",
        );
        assert_eq!(cell(&outcome, "Must support SSO"), "Yes - Reported without rationale");
        assert_eq!(cell(&outcome, "Must provide REST API"), "No - Reported without rationale");
        assert_eq!(
            cell(&outcome, "Must log audits"),
            "No - No information found in proposal"
        );
        assert_eq!(outcome.price, "$4,000");
        assert_consistent(&outcome);
    }

    #[test]
    fn test_flat_list_keeps_positions_of_unrecognised_answers() {
        let slots = bind_verdict_list("Yes, Partially, No", 3);
        let verdicts: Vec<Option<Verdict>> =
            slots.iter().map(|s| s.as_ref().map(|a| a.verdict)).collect();
        assert_eq!(
            verdicts,
            vec![Some(Verdict::Yes), Some(Verdict::NotSure), Some(Verdict::No)]
        );
    }

    #[test]
    fn test_flat_list_skips_preamble_and_prose() {
        let response = "Here are my answers:\nBased on the proposal\nYes\nNo, Yes\nTotal Project Cost: $1,200";
        let slots = bind_verdict_list(response, 3);
        let verdicts: Vec<Option<Verdict>> =
            slots.iter().map(|s| s.as_ref().map(|a| a.verdict)).collect();
        assert_eq!(
            verdicts,
            vec![Some(Verdict::Yes), Some(Verdict::No), Some(Verdict::Yes)]
        );
    }

    #[test]
    fn test_column_carries_trailers() {
        let requirements = reqs(&["Must support SSO"]);
        let outcome = evaluate_response(
            ResponseFormat::Categorized.parser(),
            "Requirement 1: Yes - ok",
            &requirements,
            "Acme",
        );
        let column = outcome.to_column();
        let labels: Vec<&str> = column.cells.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["Must support SSO", PRICE_ROW, SCORE_ROW]);
        assert_eq!(column.cells[1].1, "No pricing information found");
        assert_eq!(column.cells[2].1, "Score: 1.0/1 (Yes: 1, No: 0, Not Sure: 0)");
    }

    #[test]
    fn test_boilerplate_is_filtered() {
        let requirements = reqs(&[
            "Here are the extracted requirements",
            "Must support SSO",
            "Overall Score",
        ]);
        assert_eq!(evaluable_requirements(&requirements), vec!["Must support SSO"]);
    }
}
