use std::time::Duration;

use ap_core::model::Question;
use async_trait::async_trait;

use crate::error::TutorError;

/// What the student asks help for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRequest {
    pub question: Question,
    /// Free-text reasoning the student typed, if any.
    pub student_attempt: Option<String>,
}

impl HelpRequest {
    #[must_use]
    pub fn new(question: Question, student_attempt: Option<String>) -> Self {
        let student_attempt = student_attempt.filter(|s| !s.trim().is_empty());
        Self {
            question,
            student_attempt,
        }
    }
}

/// Three-part tutor answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorHelp {
    pub hint: String,
    pub explanation: String,
    pub concept_review: String,
}

impl TutorHelp {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hint.trim().is_empty()
            && self.explanation.trim().is_empty()
            && self.concept_review.trim().is_empty()
    }
}

/// Asynchronous source of tutoring help.
#[async_trait]
pub trait HelpDispatcher: Send + Sync {
    /// # Errors
    ///
    /// Returns `TutorError` if no help could be produced.
    async fn request_help(&self, request: &HelpRequest) -> Result<TutorHelp, TutorError>;
}

/// Offline tutor that answers from the question's own topic and explanation
/// after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct CannedTutor {
    delay: Duration,
}

impl CannedTutor {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn compose(request: &HelpRequest) -> TutorHelp {
        let question = &request.question;
        let topic = question.topic();
        let mut hint = format!(
            "Think about the relationship between {} and how it applies to this problem. \
             Consider what happens when you analyze each option carefully.",
            topic.to_lowercase()
        );
        if let Some(attempt) = &request.student_attempt {
            hint.push_str(&format!(
                "\n\nYou wrote: \"{}\". Check each step of that reasoning against the key idea.",
                attempt.trim()
            ));
        }
        TutorHelp {
            hint,
            explanation: question.explanation().to_owned(),
            concept_review: format!(
                "This question tests your understanding of {topic}. Key concepts to remember:\n\n\
                 1. Always identify what the question is really asking\n\
                 2. Eliminate obviously incorrect answers first\n\
                 3. Use your knowledge of {topic} to find the best answer"
            ),
        }
    }
}

impl Default for CannedTutor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl HelpDispatcher for CannedTutor {
    async fn request_help(&self, request: &HelpRequest) -> Result<TutorHelp, TutorError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::compose(request))
    }
}
