use std::collections::BTreeSet;
use std::fmt;

use crate::model::Question;

use super::error::{ExamError, TransitionError};
use super::interaction::ChoiceCommand;
use super::status::{QuestionStatus, StatusSummary};

//
// ─── PER-QUESTION STATE ────────────────────────────────────────────────────────
//

/// Where a single question stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    Unanswered,
    Selected(usize),
    Checked { choice: usize, correct: bool },
}

/// Answer, elimination and review state for one question.
///
/// Invariants (kept by `ExamSession`, the only writer):
/// - a checked question always has a selection, frozen until reset
/// - the selection is never an eliminated choice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionState {
    selected_answer: Option<usize>,
    eliminated: BTreeSet<usize>,
    outcome: Option<bool>,
    marked_for_review: bool,
}

impl QuestionState {
    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    #[must_use]
    pub fn eliminated(&self) -> &BTreeSet<usize> {
        &self.eliminated
    }

    #[must_use]
    pub fn is_eliminated(&self, choice: usize) -> bool {
        self.eliminated.contains(&choice)
    }

    #[must_use]
    pub fn has_checked(&self) -> bool {
        self.outcome.is_some()
    }

    /// Correctness captured at check time; `None` before checking.
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.outcome
    }

    #[must_use]
    pub fn is_marked_for_review(&self) -> bool {
        self.marked_for_review
    }

    #[must_use]
    pub fn phase(&self) -> QuestionPhase {
        match (self.selected_answer, self.outcome) {
            (Some(choice), Some(correct)) => QuestionPhase::Checked { choice, correct },
            (Some(choice), None) => QuestionPhase::Selected(choice),
            (None, _) => QuestionPhase::Unanswered,
        }
    }

    fn ensure_open(&self, index: usize) -> Result<(), ExamError> {
        if self.has_checked() {
            return Err(ExamError::transition(index, TransitionError::AlreadyChecked));
        }
        Ok(())
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One practice pass through a unit's questions.
///
/// The question list is fixed at creation. Position and per-question state are
/// independent, so moving around never loses an answer. Commands that return
/// `Err` leave the session untouched.
#[derive(Clone)]
pub struct ExamSession {
    questions: Vec<Question>,
    states: Vec<QuestionState>,
    current: usize,
}

impl ExamSession {
    /// Start a session over `questions`, positioned on the first one.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::EmptyQuestionSet` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, ExamError> {
        if questions.is_empty() {
            return Err(ExamError::EmptyQuestionSet);
        }
        let states = vec![QuestionState::default(); questions.len()];
        Ok(Self {
            questions,
            states,
            current: 0,
        })
    }

    // ─── Queries ───────────────────────────────────────────────────────────────

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; an empty session cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn current_state(&self) -> &QuestionState {
        &self.states[self.current]
    }

    /// # Errors
    ///
    /// Returns `ExamError::IndexOutOfRange` for an index past the end.
    pub fn question(&self, index: usize) -> Result<&Question, ExamError> {
        self.questions.get(index).ok_or(ExamError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// # Errors
    ///
    /// Returns `ExamError::IndexOutOfRange` for an index past the end.
    pub fn state(&self, index: usize) -> Result<&QuestionState, ExamError> {
        self.states.get(index).ok_or(ExamError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// # Errors
    ///
    /// Returns `ExamError::IndexOutOfRange` for an index past the end.
    pub fn phase(&self, index: usize) -> Result<QuestionPhase, ExamError> {
        self.state(index).map(QuestionState::phase)
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.len()
    }

    /// Per-question navigator badges, recomputed on every call.
    #[must_use]
    pub fn statuses(&self) -> Vec<QuestionStatus> {
        self.states.iter().map(QuestionStatus::from).collect()
    }

    /// Aggregate counters derived from `statuses`.
    #[must_use]
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_statuses(&self.statuses())
    }

    // ─── Navigation ────────────────────────────────────────────────────────────

    /// Move to `index` without touching any question state.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::IndexOutOfRange` and keeps the position if `index`
    /// is past the end.
    pub fn go_to(&mut self, index: usize) -> Result<(), ExamError> {
        if index >= self.len() {
            return Err(ExamError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Advance one question. Returns `false` (and does nothing) on the last one.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Step back one question. Returns `false` (and does nothing) on the first one.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    // ─── Answer commands ───────────────────────────────────────────────────────

    /// Select `choice` for question `index`, replacing any earlier selection.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` / `ChoiceOutOfRange` for bad positions
    /// - `InvalidTransition(AlreadyChecked)` once the answer is checked
    /// - `InvalidTransition(ChoiceEliminated)` if the choice is crossed out
    pub fn select_choice(&mut self, index: usize, choice: usize) -> Result<(), ExamError> {
        self.ensure_choice(index, choice)?;
        let state = &mut self.states[index];
        state.ensure_open(index)?;
        if state.is_eliminated(choice) {
            return Err(ExamError::transition(index, TransitionError::ChoiceEliminated));
        }
        state.selected_answer = Some(choice);
        Ok(())
    }

    /// Cross out `choice`, or restore it if already crossed out.
    ///
    /// Crossing out the selected choice clears the selection. Returns whether
    /// the choice is eliminated afterwards.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` / `ChoiceOutOfRange` for bad positions
    /// - `InvalidTransition(AlreadyChecked)` once the answer is checked
    pub fn toggle_eliminated(&mut self, index: usize, choice: usize) -> Result<bool, ExamError> {
        self.ensure_choice(index, choice)?;
        let state = &mut self.states[index];
        state.ensure_open(index)?;
        if state.eliminated.remove(&choice) {
            return Ok(false);
        }
        state.eliminated.insert(choice);
        if state.selected_answer == Some(choice) {
            state.selected_answer = None;
        }
        Ok(true)
    }

    /// Restore every crossed-out choice of question `index`.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` for a bad index
    /// - `InvalidTransition(AlreadyChecked)` once the answer is checked
    pub fn clear_eliminated(&mut self, index: usize) -> Result<(), ExamError> {
        self.ensure_index(index)?;
        let state = &mut self.states[index];
        state.ensure_open(index)?;
        state.eliminated.clear();
        Ok(())
    }

    /// Lock in the selected answer and return whether it was correct.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` for a bad index
    /// - `InvalidTransition(AlreadyChecked)` on a repeated check
    /// - `InvalidTransition(NoSelection)` if nothing is selected
    pub fn check_answer(&mut self, index: usize) -> Result<bool, ExamError> {
        self.ensure_index(index)?;
        let state = &mut self.states[index];
        state.ensure_open(index)?;
        let Some(choice) = state.selected_answer else {
            return Err(ExamError::transition(index, TransitionError::NoSelection));
        };
        let correct = self.questions[index].is_correct(choice);
        state.outcome = Some(correct);
        Ok(correct)
    }

    /// Return question `index` to `Unanswered`, keeping its review flag.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad index.
    pub fn reset_question(&mut self, index: usize) -> Result<(), ExamError> {
        self.ensure_index(index)?;
        let state = &mut self.states[index];
        state.selected_answer = None;
        state.eliminated.clear();
        state.outcome = None;
        Ok(())
    }

    /// Flip the review flag (allowed in any phase) and return the new value.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad index.
    pub fn toggle_marked_for_review(&mut self, index: usize) -> Result<bool, ExamError> {
        self.ensure_index(index)?;
        let state = &mut self.states[index];
        state.marked_for_review = !state.marked_for_review;
        Ok(state.marked_for_review)
    }

    /// Run a command produced by an interaction adapter.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying command.
    pub fn apply(&mut self, index: usize, command: ChoiceCommand) -> Result<(), ExamError> {
        match command {
            ChoiceCommand::Select(choice) => self.select_choice(index, choice),
            ChoiceCommand::ToggleEliminated(choice) => {
                self.toggle_eliminated(index, choice).map(|_| ())
            }
        }
    }

    fn ensure_index(&self, index: usize) -> Result<(), ExamError> {
        if index >= self.len() {
            return Err(ExamError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn ensure_choice(&self, index: usize, choice: usize) -> Result<(), ExamError> {
        let choices = self.question(index)?.choice_count();
        if choice >= choices {
            return Err(ExamError::ChoiceOutOfRange {
                index,
                choice,
                choices,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for ExamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExamSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("summary", &self.summary())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, QuestionDraft, QuestionId, UnitId};

    fn build_question(n: usize) -> Question {
        QuestionDraft {
            id: QuestionId::new(format!("q{n}")),
            unit_id: UnitId::new("chem-1"),
            text: format!("Question {n}"),
            choices: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: n % 4,
            difficulty: Difficulty::Medium,
            topic: "Topic".into(),
            explanation: "Because.".into(),
        }
        .validate()
        .unwrap()
    }

    fn build_session(len: usize) -> ExamSession {
        ExamSession::new((0..len).map(build_question).collect()).unwrap()
    }

    #[test]
    fn empty_question_set_is_rejected() {
        let err = ExamSession::new(Vec::new()).unwrap_err();
        assert_eq!(err, ExamError::EmptyQuestionSet);
    }

    #[test]
    fn new_session_starts_unanswered_at_first_question() {
        let session = build_session(3);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.len(), 3);
        assert!(!session.can_go_previous());
        assert!(session.can_go_next());
        assert_eq!(session.phase(2).unwrap(), QuestionPhase::Unanswered);
    }

    #[test]
    fn scenario_answer_mark_and_walk_to_end() {
        let mut session = build_session(4);
        // question 1 (index 0) has correct answer 0
        session.select_choice(0, 0).unwrap();
        assert!(session.check_answer(0).unwrap());
        session.toggle_marked_for_review(2).unwrap();

        assert!(session.next());
        assert!(session.next());
        assert!(session.next());
        assert!(!session.next());
        assert_eq!(session.current_index(), 3);

        let summary = session.summary();
        assert_eq!(summary.answered, 1);
        assert_eq!(summary.marked_for_review, 1);
        assert_eq!(summary.remaining, 3);
        assert_eq!(summary.correct, 1);
    }

    #[test]
    fn eliminating_selected_choice_clears_selection() {
        let mut session = build_session(4);
        session.select_choice(0, 2).unwrap();
        assert!(session.toggle_eliminated(0, 2).unwrap());

        let state = session.state(0).unwrap();
        assert_eq!(state.selected_answer(), None);
        assert_eq!(state.eliminated().iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn restoring_choice_keeps_other_selection() {
        let mut session = build_session(4);
        session.toggle_eliminated(0, 1).unwrap();
        session.select_choice(0, 3).unwrap();
        assert!(!session.toggle_eliminated(0, 1).unwrap());
        assert_eq!(session.state(0).unwrap().selected_answer(), Some(3));
        assert!(session.state(0).unwrap().eliminated().is_empty());
    }

    #[test]
    fn selecting_eliminated_choice_is_refused() {
        let mut session = build_session(2);
        session.toggle_eliminated(1, 0).unwrap();
        let err = session.select_choice(1, 0).unwrap_err();
        assert_eq!(
            err,
            ExamError::InvalidTransition {
                index: 1,
                reason: TransitionError::ChoiceEliminated,
            }
        );
        assert_eq!(session.state(1).unwrap().selected_answer(), None);
    }

    #[test]
    fn reselecting_overwrites_previous_choice() {
        let mut session = build_session(1);
        session.select_choice(0, 1).unwrap();
        session.select_choice(0, 2).unwrap();
        assert_eq!(session.phase(0).unwrap(), QuestionPhase::Selected(2));
    }

    #[test]
    fn second_check_is_a_no_op() {
        let mut session = build_session(2);
        session.select_choice(0, 1).unwrap();
        assert!(!session.check_answer(0).unwrap());
        let after_first = session.clone();

        let err = session.check_answer(0).unwrap_err();
        assert_eq!(
            err,
            ExamError::InvalidTransition {
                index: 0,
                reason: TransitionError::AlreadyChecked,
            }
        );
        assert_eq!(session.states, after_first.states);
        assert_eq!(session.current_index(), after_first.current_index());
    }

    #[test]
    fn check_without_selection_is_refused() {
        let mut session = build_session(1);
        let err = session.check_answer(0).unwrap_err();
        assert!(matches!(
            err,
            ExamError::InvalidTransition {
                reason: TransitionError::NoSelection,
                ..
            }
        ));
        assert!(!session.state(0).unwrap().has_checked());
    }

    #[test]
    fn checked_answer_is_frozen() {
        let mut session = build_session(1);
        session.select_choice(0, 0).unwrap();
        session.check_answer(0).unwrap();

        assert!(session.select_choice(0, 1).is_err());
        assert!(session.toggle_eliminated(0, 2).is_err());
        assert!(session.clear_eliminated(0).is_err());
        assert_eq!(
            session.phase(0).unwrap(),
            QuestionPhase::Checked {
                choice: 0,
                correct: true,
            }
        );
    }

    #[test]
    fn review_flag_survives_check_and_reset() {
        let mut session = build_session(1);
        session.select_choice(0, 3).unwrap();
        session.check_answer(0).unwrap();
        assert!(session.toggle_marked_for_review(0).unwrap());

        session.reset_question(0).unwrap();
        let state = session.state(0).unwrap();
        assert_eq!(state.selected_answer(), None);
        assert!(state.eliminated().is_empty());
        assert!(!state.has_checked());
        assert!(state.is_marked_for_review());
    }

    #[test]
    fn go_to_out_of_range_keeps_position() {
        let mut session = build_session(4);
        session.go_to(2).unwrap();
        let err = session.go_to(99).unwrap_err();
        assert_eq!(err, ExamError::IndexOutOfRange { index: 99, len: 4 });
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn navigation_keeps_answers() {
        let mut session = build_session(3);
        session.select_choice(0, 1).unwrap();
        session.go_to(2).unwrap();
        assert!(session.previous());
        assert!(session.previous());
        assert!(!session.previous());
        assert_eq!(session.current_state().selected_answer(), Some(1));
    }

    #[test]
    fn choice_out_of_range_is_refused() {
        let mut session = build_session(1);
        let err = session.select_choice(0, 4).unwrap_err();
        assert_eq!(
            err,
            ExamError::ChoiceOutOfRange {
                index: 0,
                choice: 4,
                choices: 4,
            }
        );
        assert!(session.toggle_eliminated(5, 0).is_err());
    }

    #[test]
    fn clear_eliminated_restores_all_choices() {
        let mut session = build_session(1);
        session.toggle_eliminated(0, 0).unwrap();
        session.toggle_eliminated(0, 1).unwrap();
        session.clear_eliminated(0).unwrap();
        assert!(session.state(0).unwrap().eliminated().is_empty());
    }

    #[test]
    fn apply_dispatches_adapter_commands() {
        let mut session = build_session(1);
        session.apply(0, ChoiceCommand::Select(1)).unwrap();
        session.apply(0, ChoiceCommand::ToggleEliminated(1)).unwrap();
        assert_eq!(session.state(0).unwrap().selected_answer(), None);
        assert!(session.state(0).unwrap().is_eliminated(1));
    }

    #[test]
    fn statuses_report_correctness_only_after_check() {
        let mut session = build_session(2);
        session.select_choice(1, 0).unwrap();
        let statuses = session.statuses();
        assert_eq!(statuses[1].correct, None);
        assert!(!statuses[1].answered);

        session.check_answer(1).unwrap();
        let statuses = session.statuses();
        assert_eq!(statuses[1].correct, Some(false));
        assert!(statuses[1].answered);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const QUESTIONS: usize = 4;

        #[derive(Debug, Clone)]
        enum Command {
            Select(usize, usize),
            Eliminate(usize, usize),
            ClearEliminated(usize),
            Check(usize),
            Reset(usize),
            Mark(usize),
            GoTo(usize),
            Next,
            Previous,
        }

        fn command() -> impl Strategy<Value = Command> {
            // indices and choices deliberately run past the valid range
            let index = 0..QUESTIONS + 2;
            let choice = 0usize..6;
            prop_oneof![
                (index.clone(), choice.clone()).prop_map(|(i, c)| Command::Select(i, c)),
                (index.clone(), choice).prop_map(|(i, c)| Command::Eliminate(i, c)),
                index.clone().prop_map(Command::ClearEliminated),
                index.clone().prop_map(Command::Check),
                index.clone().prop_map(Command::Reset),
                index.clone().prop_map(Command::Mark),
                index.prop_map(Command::GoTo),
                Just(Command::Next),
                Just(Command::Previous),
            ]
        }

        fn run(session: &mut ExamSession, cmd: &Command) -> Result<(), ExamError> {
            match *cmd {
                Command::Select(i, c) => session.select_choice(i, c),
                Command::Eliminate(i, c) => session.toggle_eliminated(i, c).map(|_| ()),
                Command::ClearEliminated(i) => session.clear_eliminated(i),
                Command::Check(i) => session.check_answer(i).map(|_| ()),
                Command::Reset(i) => session.reset_question(i),
                Command::Mark(i) => session.toggle_marked_for_review(i).map(|_| ()),
                Command::GoTo(i) => session.go_to(i),
                Command::Next => {
                    session.next();
                    Ok(())
                }
                Command::Previous => {
                    session.previous();
                    Ok(())
                }
            }
        }

        fn assert_invariants(session: &ExamSession) -> Result<(), TestCaseError> {
            prop_assert!(session.current_index() < session.len());
            for state in &session.states {
                if state.has_checked() {
                    prop_assert!(state.selected_answer().is_some());
                }
                if let Some(selected) = state.selected_answer() {
                    prop_assert!(!state.is_eliminated(selected));
                }
            }
            let checked = session.states.iter().filter(|s| s.has_checked()).count();
            prop_assert_eq!(session.summary().answered, checked);
            prop_assert_eq!(session.summary().remaining, session.len() - checked);
            Ok(())
        }

        proptest! {
            #[test]
            fn invariants_hold_for_any_command_sequence(
                commands in prop::collection::vec(command(), 0..64)
            ) {
                let mut session = build_session(QUESTIONS);
                assert_invariants(&session)?;
                for cmd in &commands {
                    let before = session.clone();
                    let result = run(&mut session, cmd);
                    if result.is_err() {
                        prop_assert_eq!(&session.states, &before.states);
                        prop_assert_eq!(session.current_index(), before.current_index());
                    }
                    assert_invariants(&session)?;
                }
            }

            #[test]
            fn checked_selection_never_changes(
                choice in 0usize..4,
                commands in prop::collection::vec(command(), 0..32)
            ) {
                let mut session = build_session(QUESTIONS);
                session.select_choice(0, choice).unwrap();
                session.check_answer(0).unwrap();
                for cmd in commands.iter().filter(|c| !matches!(c, Command::Reset(0))) {
                    let _ = run(&mut session, cmd);
                    prop_assert_eq!(session.states[0].selected_answer(), Some(choice));
                    prop_assert!(session.states[0].has_checked());
                }
            }

            #[test]
            fn double_toggle_restores_membership(
                prefix in prop::collection::vec((0usize..QUESTIONS, 0usize..4), 0..8),
                index in 0usize..QUESTIONS,
                choice in 0usize..4,
            ) {
                let mut session = build_session(QUESTIONS);
                for (i, c) in prefix {
                    let _ = session.toggle_eliminated(i, c);
                }
                let was = session.states[index].is_eliminated(choice);
                session.toggle_eliminated(index, choice).unwrap();
                session.toggle_eliminated(index, choice).unwrap();
                prop_assert_eq!(session.states[index].is_eliminated(choice), was);
            }

            #[test]
            fn reset_always_yields_unanswered(
                commands in prop::collection::vec(command(), 0..32),
                index in 0usize..QUESTIONS,
            ) {
                let mut session = build_session(QUESTIONS);
                for cmd in &commands {
                    let _ = run(&mut session, cmd);
                }
                let marked = session.states[index].is_marked_for_review();
                session.reset_question(index).unwrap();
                let state = &session.states[index];
                prop_assert_eq!(state.selected_answer(), None);
                prop_assert!(state.eliminated().is_empty());
                prop_assert!(!state.has_checked());
                prop_assert_eq!(state.is_marked_for_review(), marked);
            }
        }
    }
}
