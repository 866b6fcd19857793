// bidmatrix-core/src/domain/matrix/score.rs

use crate::domain::matrix::verdict::Verdict;
use serde::Serialize;
use std::fmt;

/// Per-vendor tally. Always derived from the stored cells, never from the
/// model's own summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreSummary {
    pub yes_count: usize,
    pub no_count: usize,
    pub not_sure_count: usize,
}

impl ScoreSummary {
    pub fn from_verdicts<I: IntoIterator<Item = Verdict>>(verdicts: I) -> Self {
        let mut summary = Self::default();
        for verdict in verdicts {
            match verdict {
                Verdict::Yes => summary.yes_count += 1,
                Verdict::No => summary.no_count += 1,
                Verdict::NotSure => summary.not_sure_count += 1,
            }
        }
        summary
    }

    /// Scans rendered cells for their leading verdict word. Cells without one
    /// (`N/A`, blanks) are ignored.
    pub fn from_cells<'a, I: IntoIterator<Item = &'a str>>(cells: I) -> Self {
        Self::from_verdicts(cells.into_iter().filter_map(Verdict::from_cell))
    }

    pub fn total(&self) -> usize {
        self.yes_count + self.no_count + self.not_sure_count
    }

    /// `Yes` counts 1, `Not Sure` counts 0.5.
    pub fn score(&self) -> f64 {
        self.yes_count as f64 + self.not_sure_count as f64 * 0.5
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {:.1}/{} (Yes: {}, No: {}, Not Sure: {})",
            self.score(),
            self.total(),
            self.yes_count,
            self.no_count,
            self.not_sure_count
        )
    }
}
