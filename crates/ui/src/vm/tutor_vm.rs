use ap_core::model::{Question, QuestionId};
use services::{HelpOutcome, HelpRequest, TutorError, TutorHelp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TutorTab {
    Hint,
    Explanation,
    Concept,
}

impl TutorTab {
    pub const ALL: [Self; 3] = [Self::Hint, Self::Explanation, Self::Concept];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hint => "Hint",
            Self::Explanation => "Explanation",
            Self::Concept => "Concept Review",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TutorPhase {
    Idle,
    Loading,
    Ready(TutorHelp),
    Failed(String),
}

/// Help panel state for the question on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorVm {
    /// Question currently on screen.
    shown: Option<QuestionId>,
    /// Question the last help request was made for.
    requested: Option<QuestionId>,
    phase: TutorPhase,
    tab: TutorTab,
    attempt: String,
}

impl Default for TutorVm {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shown: None,
            requested: None,
            phase: TutorPhase::Idle,
            tab: TutorTab::Hint,
            attempt: String::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> &TutorPhase {
        &self.phase
    }

    #[must_use]
    pub fn tab(&self) -> TutorTab {
        self.tab
    }

    #[must_use]
    pub fn attempt(&self) -> &str {
        &self.attempt
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == TutorPhase::Loading
    }

    pub fn set_attempt(&mut self, attempt: String) {
        self.attempt = attempt;
    }

    pub fn select_tab(&mut self, tab: TutorTab) {
        self.tab = tab;
    }

    /// Move to the loading phase and build the request to send.
    pub fn begin(&mut self, question: &Question) -> HelpRequest {
        self.shown = Some(question.id().clone());
        self.requested = Some(question.id().clone());
        self.phase = TutorPhase::Loading;
        self.tab = TutorTab::Hint;
        HelpRequest::new(question.clone(), Some(self.attempt.clone()))
    }

    /// Apply a finished request. Stale outcomes and answers for a question
    /// no longer on screen leave the panel alone.
    pub fn finish(&mut self, question_id: &QuestionId, result: Result<HelpOutcome, TutorError>) {
        if self.requested.as_ref() != Some(question_id) || !self.is_loading() {
            return;
        }
        match result {
            Ok(HelpOutcome::Delivered(help)) => self.phase = TutorPhase::Ready(help),
            Ok(HelpOutcome::Stale) => {}
            Err(err) => self.phase = TutorPhase::Failed(err.to_string()),
        }
    }

    /// Reset when the displayed question changes. The first question seen is
    /// only recorded. Returns `true` if a pending request should be cancelled.
    pub fn follow_question(&mut self, question_id: &QuestionId) -> bool {
        match &self.shown {
            Some(shown) if shown == question_id => false,
            None => {
                self.shown = Some(question_id.clone());
                false
            }
            Some(_) => {
                let was_loading = self.is_loading();
                *self = Self::new();
                self.shown = Some(question_id.clone());
                was_loading
            }
        }
    }

    pub fn close(&mut self) {
        let shown = self.shown.take();
        *self = Self::new();
        self.shown = shown;
    }

    /// Text for the selected tab once help has arrived.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        let TutorPhase::Ready(help) = &self.phase else {
            return None;
        };
        Some(match self.tab {
            TutorTab::Hint => &help.hint,
            TutorTab::Explanation => &help.explanation,
            TutorTab::Concept => &help.concept_review,
        })
    }
}
