use std::sync::Arc;

use tracing::{debug, warn};

use super::dispatcher::{HelpDispatcher, HelpRequest, TutorHelp};
use super::tracker::HelpTracker;
use crate::error::TutorError;

/// Result of a help request once its future completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpOutcome {
    Delivered(TutorHelp),
    /// A newer request or a cancel happened while this one was pending.
    Stale,
}

/// Front door for AI help. Holds no session state, so the caller may keep
/// navigating while a request is pending.
pub struct TutorService {
    dispatcher: Arc<dyn HelpDispatcher>,
    tracker: HelpTracker,
}

impl TutorService {
    #[must_use]
    pub fn new(dispatcher: Arc<dyn HelpDispatcher>) -> Self {
        Self {
            dispatcher,
            tracker: HelpTracker::new(),
        }
    }

    /// Ask for help on `request.question`.
    ///
    /// # Errors
    ///
    /// Returns `TutorError` if the dispatcher fails or answers with nothing,
    /// unless the request went stale first.
    pub async fn ask(&self, request: HelpRequest) -> Result<HelpOutcome, TutorError> {
        let question_id = request.question.id();
        let ticket = self.tracker.begin();
        debug!(question = %question_id, "help requested");

        let result = self.dispatcher.request_help(&request).await;

        if !self.tracker.is_current(&ticket) {
            warn!(question = %question_id, "discarding stale tutor response");
            return Ok(HelpOutcome::Stale);
        }
        let help = result?;
        if help.is_empty() {
            return Err(TutorError::EmptyResponse);
        }
        Ok(HelpOutcome::Delivered(help))
    }

    /// Invalidate any pending request, e.g. when the help panel closes.
    pub fn cancel(&self) {
        self.tracker.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor::CannedTutor;
    use ap_core::model::{Difficulty, Question, QuestionDraft, QuestionId, UnitId};
    use async_trait::async_trait;
    use std::time::Duration;

    fn question(id: &str) -> Question {
        QuestionDraft {
            id: QuestionId::new(id),
            unit_id: UnitId::new("chem-1"),
            text: "Which?".into(),
            choices: vec!["a".into(), "b".into()],
            correct_answer: 0,
            difficulty: Difficulty::Easy,
            topic: "Periodic Trends".into(),
            explanation: "Shielding.".into(),
        }
        .validate()
        .unwrap()
    }

    struct SilentTutor;

    #[async_trait]
    impl HelpDispatcher for SilentTutor {
        async fn request_help(&self, _request: &HelpRequest) -> Result<TutorHelp, TutorError> {
            Ok(TutorHelp {
                hint: String::new(),
                explanation: " ".into(),
                concept_review: String::new(),
            })
        }
    }

    struct BrokenTutor;

    #[async_trait]
    impl HelpDispatcher for BrokenTutor {
        async fn request_help(&self, _request: &HelpRequest) -> Result<TutorHelp, TutorError> {
            Err(TutorError::Unavailable("offline".into()))
        }
    }

    #[tokio::test]
    async fn single_request_is_delivered() {
        let svc = TutorService::new(Arc::new(CannedTutor::new(Duration::ZERO)));
        let outcome = svc.ask(HelpRequest::new(question("q1"), None)).await.unwrap();
        assert!(matches!(outcome, HelpOutcome::Delivered(help) if help.explanation == "Shielding."));
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_request_comes_back_stale() {
        let svc = TutorService::new(Arc::new(CannedTutor::default()));
        let (first, second) = tokio::join!(
            svc.ask(HelpRequest::new(question("q1"), None)),
            async {
                tokio::task::yield_now().await;
                svc.ask(HelpRequest::new(question("q2"), None)).await
            }
        );
        assert_eq!(first.unwrap(), HelpOutcome::Stale);
        assert!(matches!(second.unwrap(), HelpOutcome::Delivered(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_response() {
        let svc = TutorService::new(Arc::new(CannedTutor::default()));
        let (outcome, ()) = tokio::join!(
            svc.ask(HelpRequest::new(question("q1"), None)),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                svc.cancel();
            }
        );
        assert_eq!(outcome.unwrap(), HelpOutcome::Stale);
    }

    #[tokio::test]
    async fn dispatcher_failures_surface() {
        let svc = TutorService::new(Arc::new(BrokenTutor));
        let err = svc.ask(HelpRequest::new(question("q1"), None)).await.unwrap_err();
        assert!(matches!(err, TutorError::Unavailable(_)));

        let svc = TutorService::new(Arc::new(SilentTutor));
        let err = svc.ask(HelpRequest::new(question("q1"), None)).await.unwrap_err();
        assert!(matches!(err, TutorError::EmptyResponse));
    }
}
