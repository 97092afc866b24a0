use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::{QuestionId, UnitId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least two choices, got {len}")]
    TooFewChoices { len: usize },

    #[error("choice {index} is empty")]
    EmptyChoice { index: usize },

    #[error("correct answer {index} is outside the {len} choices")]
    CorrectAnswerOutOfRange { index: usize, len: usize },

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// How demanding a question is, as labelled in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(QuestionError::UnknownDifficulty(other.to_owned())),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it comes out of the catalog seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub unit_id: UnitId,
    pub text: String,
    pub choices: Vec<String>,
    pub correct_answer: usize,
    pub difficulty: Difficulty,
    pub topic: String,
    pub explanation: String,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is empty, there are fewer than two
    /// choices, a choice is blank, or the correct answer is out of range.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if self.choices.len() < 2 {
            return Err(QuestionError::TooFewChoices {
                len: self.choices.len(),
            });
        }
        if let Some(index) = self.choices.iter().position(|c| c.trim().is_empty()) {
            return Err(QuestionError::EmptyChoice { index });
        }
        if self.correct_answer >= self.choices.len() {
            return Err(QuestionError::CorrectAnswerOutOfRange {
                index: self.correct_answer,
                len: self.choices.len(),
            });
        }

        Ok(Question {
            id: self.id,
            unit_id: self.unit_id,
            text: self.text,
            choices: self.choices,
            correct_answer: self.correct_answer,
            difficulty: self.difficulty,
            topic: self.topic,
            explanation: self.explanation,
        })
    }
}

/// A multiple-choice practice question. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    unit_id: UnitId,
    text: String,
    choices: Vec<String>,
    correct_answer: usize,
    difficulty: Difficulty,
    topic: String,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn unit_id(&self) -> &UnitId {
        &self.unit_id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}

/// Letter shown next to a choice: `A`, `B`, `C`, ...
///
/// Past `Z` the position number is used instead.
#[must_use]
pub fn choice_label(choice: usize) -> String {
    u8::try_from(choice)
        .ok()
        .filter(|offset| *offset < 26)
        .map_or_else(|| (choice + 1).to_string(), |offset| char::from(b'A' + offset).to_string())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new("q2"),
            unit_id: UnitId::new("chem-1"),
            text: "As atomic radius increases down a group, what happens to first ionization energy?"
                .into(),
            choices: vec![
                "Increases".into(),
                "Decreases".into(),
                "Remains constant".into(),
            ],
            correct_answer: 1,
            difficulty: Difficulty::Easy,
            topic: "Periodic Trends".into(),
            explanation: "Outer electrons are farther from the nucleus.".into(),
        }
    }

    #[test]
    fn valid_draft_builds_question() {
        let q = draft().validate().unwrap();
        assert_eq!(q.choice_count(), 3);
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert_eq!(q.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn rejects_single_choice() {
        let mut d = draft();
        d.choices.truncate(1);
        d.correct_answer = 0;
        assert_eq!(d.validate(), Err(QuestionError::TooFewChoices { len: 1 }));
    }

    #[test]
    fn rejects_out_of_range_answer() {
        let mut d = draft();
        d.correct_answer = 3;
        assert_eq!(
            d.validate(),
            Err(QuestionError::CorrectAnswerOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn rejects_blank_text_and_choice() {
        let mut d = draft();
        d.text = "  ".into();
        assert_eq!(d.validate(), Err(QuestionError::EmptyText));

        let mut d = draft();
        d.choices[2] = String::new();
        assert_eq!(d.validate(), Err(QuestionError::EmptyChoice { index: 2 }));
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn choice_labels_are_letters() {
        assert_eq!(choice_label(0), "A");
        assert_eq!(choice_label(3), "D");
        assert_eq!(choice_label(26), "27");
    }
}
