use serde::Serialize;

use super::session::QuestionState;

/// Navigator badge for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionStatus {
    pub answered: bool,
    /// `None` until the answer has been checked.
    pub correct: Option<bool>,
    pub marked_for_review: bool,
}

impl From<&QuestionState> for QuestionStatus {
    fn from(state: &QuestionState) -> Self {
        Self {
            answered: state.has_checked(),
            correct: state.is_correct(),
            marked_for_review: state.is_marked_for_review(),
        }
    }
}

/// Aggregate counters shown under the navigator grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub marked_for_review: usize,
    pub remaining: usize,
}

impl StatusSummary {
    /// Fold a projection into counters.
    #[must_use]
    pub fn from_statuses(statuses: &[QuestionStatus]) -> Self {
        statuses.iter().fold(
            Self {
                total: statuses.len(),
                ..Self::default()
            },
            |mut acc, status| {
                if status.answered {
                    acc.answered += 1;
                } else {
                    acc.remaining += 1;
                }
                if status.correct == Some(true) {
                    acc.correct += 1;
                }
                if status.marked_for_review {
                    acc.marked_for_review += 1;
                }
                acc
            },
        )
    }

    /// Share of checked answers that were correct, as a whole percentage.
    #[must_use]
    pub fn accuracy_percent(&self) -> Option<u8> {
        if self.answered == 0 {
            return None;
        }
        let pct = self.correct * 100 / self.answered;
        u8::try_from(pct).ok()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.remaining == 0
    }
}
