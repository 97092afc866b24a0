use thiserror::Error;

/// Why a command was refused in the question's current phase.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("the answer has already been checked")]
    AlreadyChecked,

    #[error("no answer is selected")]
    NoSelection,

    #[error("the choice is eliminated")]
    ChoiceEliminated,
}

/// Errors emitted by `ExamSession` commands and lookups.
///
/// Every variant is recoverable: the session is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("question {index}: {reason}")]
    InvalidTransition {
        index: usize,
        reason: TransitionError,
    },

    #[error("question index {index} is out of range for {len} questions")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("choice {choice} is out of range for question {index} ({choices} choices)")]
    ChoiceOutOfRange {
        index: usize,
        choice: usize,
        choices: usize,
    },

    #[error("no questions available")]
    EmptyQuestionSet,
}

impl ExamError {
    pub(crate) fn transition(index: usize, reason: TransitionError) -> Self {
        Self::InvalidTransition { index, reason }
    }
}
