use std::fmt;
use std::str::FromStr;

use ap_core::model::{Difficulty, Question, QuestionError};

/// Which questions of a unit make it into a practice session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Every option in display order.
    pub const OPTIONS: [DifficultyFilter; 4] = [
        DifficultyFilter::All,
        DifficultyFilter::Only(Difficulty::Easy),
        DifficultyFilter::Only(Difficulty::Medium),
        DifficultyFilter::Only(Difficulty::Hard),
    ];

    #[must_use]
    pub fn matches(self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Only(difficulty) => question.difficulty() == difficulty,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(difficulty) => difficulty.as_str(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Levels",
            Self::Only(difficulty) => difficulty.label(),
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyFilter {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}
