use ap_core::exam::{
    BluebookStyle, ChoiceGesture, ExamError, ExamSession, FlashcardStyle, InteractionStyle,
    QuestionPhase,
};
use ap_core::model::{Difficulty, Question, choice_label};
use services::{PracticeError, PracticeService};

use super::navigator_vm::{NavigatorVm, map_navigator};

/// Which interaction variant drives the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeMode {
    Flashcard,
    Bluebook,
}

impl PracticeMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Flashcard => "Practice",
            Self::Bluebook => "Exam Mode",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamIntent {
    Choice { choice: usize, gesture: ChoiceGesture },
    ToggleEliminator,
    ClearEliminated,
    Check,
    Reset,
    ToggleReview,
    Next,
    Previous,
    GoTo(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: String,
    pub text: String,
    pub class: &'static str,
    pub eliminated: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub headline: &'static str,
    pub answer_label: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub position_label: String,
    pub text: String,
    pub topic: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub choices: Vec<ChoiceVm>,
    pub feedback: Option<FeedbackVm>,
    pub marked: bool,
    pub can_check: bool,
    pub checked: bool,
    pub eliminator_offered: bool,
    pub eliminator_mode: bool,
    pub has_eliminated: bool,
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "difficulty easy",
        Difficulty::Medium => "difficulty medium",
        Difficulty::Hard => "difficulty hard",
    }
}

fn error_notice(err: &ExamError) -> String {
    match err {
        ExamError::InvalidTransition { reason, .. } => {
            let mut text = reason.to_string();
            if let Some(first) = text.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            format!("{text}.")
        }
        other => other.to_string(),
    }
}

/// Owns the live `ExamSession` for one practice screen.
pub struct ExamVm {
    session: ExamSession,
    mode: PracticeMode,
    bluebook: BluebookStyle,
    notice: Option<String>,
}

impl ExamVm {
    #[must_use]
    pub fn new(session: ExamSession, mode: PracticeMode) -> Self {
        Self {
            session,
            mode,
            bluebook: BluebookStyle::default(),
            notice: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> PracticeMode {
        self.mode
    }

    #[must_use]
    pub fn session(&self) -> &ExamSession {
        &self.session
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.session.current_question()
    }

    /// Last refused command, cleared by the next successful one.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn style(&self) -> &dyn InteractionStyle {
        match self.mode {
            PracticeMode::Flashcard => &FlashcardStyle,
            PracticeMode::Bluebook => &self.bluebook,
        }
    }

    pub fn apply(&mut self, practice: &PracticeService, intent: ExamIntent) {
        let index = self.session.current_index();
        let result = match intent {
            ExamIntent::Choice { choice, gesture } => match self.style().command_for(gesture, choice)
            {
                Some(command) => self.session.apply(index, command).map_err(PracticeError::from),
                None => Ok(()),
            },
            ExamIntent::ToggleEliminator => {
                if self.mode == PracticeMode::Bluebook {
                    self.bluebook.toggle_mode();
                }
                Ok(())
            }
            ExamIntent::ClearEliminated => self
                .session
                .clear_eliminated(index)
                .map_err(PracticeError::from),
            ExamIntent::Check => practice.check_answer(&mut self.session, index).map(|_| ()),
            ExamIntent::Reset => self.session.reset_question(index).map_err(PracticeError::from),
            ExamIntent::ToggleReview => self
                .session
                .toggle_marked_for_review(index)
                .map(|_| ())
                .map_err(PracticeError::from),
            ExamIntent::Next => {
                self.session.next();
                Ok(())
            }
            ExamIntent::Previous => {
                self.session.previous();
                Ok(())
            }
            ExamIntent::GoTo(target) => self.session.go_to(target).map_err(PracticeError::from),
        };

        self.notice = match result {
            Ok(()) => None,
            Err(PracticeError::Exam(err)) => Some(error_notice(&err)),
            Err(other) => Some(other.to_string()),
        };
    }

    /// Replace the session with a shuffled copy.
    pub fn shuffle(&mut self, practice: &PracticeService) {
        match practice.shuffled(&self.session) {
            Ok(session) => {
                self.session = session;
                self.notice = None;
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    #[must_use]
    pub fn card(&self) -> QuestionCardVm {
        let question = self.session.current_question();
        let state = self.session.current_state();
        let phase = state.phase();
        let checked = matches!(phase, QuestionPhase::Checked { .. });
        let selected = state.selected_answer();

        let choices = question
            .choices()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let eliminated = state.is_eliminated(index);
                let class = if checked {
                    if question.is_correct(index) {
                        "choice correct"
                    } else if selected == Some(index) {
                        "choice incorrect"
                    } else {
                        "choice dimmed"
                    }
                } else if eliminated {
                    "choice eliminated"
                } else if selected == Some(index) {
                    "choice selected"
                } else {
                    "choice"
                };
                ChoiceVm {
                    index,
                    label: choice_label(index),
                    text: text.clone(),
                    class,
                    eliminated,
                }
            })
            .collect();

        let feedback = match phase {
            QuestionPhase::Checked { correct, .. } => Some(FeedbackVm {
                correct,
                headline: if correct { "Correct!" } else { "Not quite" },
                answer_label: format!(
                    "Correct answer: {}",
                    choice_label(question.correct_answer())
                ),
                explanation: question.explanation().to_owned(),
            }),
            _ => None,
        };

        let style = self.style();
        QuestionCardVm {
            position_label: format!(
                "Question {} of {}",
                self.session.current_index() + 1,
                self.session.len()
            ),
            text: question.text().to_owned(),
            topic: question.topic().to_owned(),
            difficulty_label: question.difficulty().label(),
            difficulty_class: difficulty_class(question.difficulty()),
            choices,
            feedback,
            marked: state.is_marked_for_review(),
            can_check: matches!(phase, QuestionPhase::Selected(_)),
            checked,
            eliminator_offered: style.offers_eliminator(),
            eliminator_mode: self.mode == PracticeMode::Bluebook && self.bluebook.eliminator_mode(),
            has_eliminated: !state.eliminated().is_empty(),
        }
    }

    #[must_use]
    pub fn navigator(&self) -> NavigatorVm {
        map_navigator(&self.session.statuses(), self.session.current_index())
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.session.can_go_previous()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.session.can_go_next()
    }
}
