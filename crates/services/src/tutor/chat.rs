use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::dispatcher::CannedTutor;
use super::tracker::HelpTracker;
use crate::Clock;
use crate::error::TutorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the tutor conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            sent_at,
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            sent_at,
        }
    }
}

/// A free-form question for the tutor, optionally scoped to a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub prompt: String,
    pub subject_title: Option<String>,
}

impl ChatRequest {
    #[must_use]
    pub fn new(prompt: impl Into<String>, subject_title: Option<String>) -> Self {
        Self {
            prompt: prompt.into(),
            subject_title,
        }
    }
}

/// Asynchronous source of chat replies.
#[async_trait]
pub trait ChatDispatcher: Send + Sync {
    /// # Errors
    ///
    /// Returns `TutorError` if no reply could be produced.
    async fn reply(&self, request: &ChatRequest) -> Result<String, TutorError>;
}

const QUOTE_CHARS: usize = 50;

fn canned_reply(request: &ChatRequest) -> String {
    let quoted: String = request.prompt.chars().take(QUOTE_CHARS).collect();
    let subject = request.subject_title.as_deref().unwrap_or("AP studies");
    format!(
        "Great question! Let me help you understand this better.\n\n\
         Based on your question about \"{quoted}...\", here's a detailed explanation:\n\n\
         1. Key Concept: This relates to fundamental principles in {subject}.\n\n\
         2. Step-by-Step Breakdown:\n\
         \u{20}  - First, consider the underlying theory\n\
         \u{20}  - Then, apply it to specific examples\n\
         \u{20}  - Finally, practice with similar problems\n\n\
         3. Pro Tip: Focus on understanding the \"why\" behind each step, not just the \"how\".\n\n\
         Would you like me to provide a practice problem to test your understanding?"
    )
}

#[async_trait]
impl ChatDispatcher for CannedTutor {
    async fn reply(&self, request: &ChatRequest) -> Result<String, TutorError> {
        if !self.delay().is_zero() {
            tokio::time::sleep(self.delay()).await;
        }
        Ok(canned_reply(request))
    }
}

/// Result of a chat request once its future completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    Delivered(ChatMessage),
    Stale,
}

/// Open-ended tutor conversation. Late replies are dropped the same way as
/// question help.
pub struct ChatService {
    clock: Clock,
    dispatcher: Arc<dyn ChatDispatcher>,
    tracker: HelpTracker,
}

impl ChatService {
    #[must_use]
    pub fn new(clock: Clock, dispatcher: Arc<dyn ChatDispatcher>) -> Self {
        Self {
            clock,
            dispatcher,
            tracker: HelpTracker::new(),
        }
    }

    /// Timestamp for a message the student is about to send.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Send `request` and wait for the tutor's reply.
    ///
    /// # Errors
    ///
    /// - `TutorError::EmptyPrompt` for a blank prompt
    /// - `TutorError::EmptyResponse` if the reply is blank
    /// - whatever the dispatcher fails with, unless the request went stale
    pub async fn send(&self, request: ChatRequest) -> Result<ChatOutcome, TutorError> {
        if request.prompt.trim().is_empty() {
            return Err(TutorError::EmptyPrompt);
        }
        let ticket = self.tracker.begin();
        debug!(subject = ?request.subject_title, "chat message sent");

        let result = self.dispatcher.reply(&request).await;

        if !self.tracker.is_current(&ticket) {
            warn!("discarding stale chat reply");
            return Ok(ChatOutcome::Stale);
        }
        let reply = result?;
        if reply.trim().is_empty() {
            return Err(TutorError::EmptyResponse);
        }
        Ok(ChatOutcome::Delivered(ChatMessage::assistant(
            reply,
            self.clock.now(),
        )))
    }

    /// Drop any reply still in flight, e.g. when the conversation is cleared.
    pub fn cancel(&self) {
        self.tracker.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_core::time::{fixed_clock, fixed_now};
    use std::time::Duration;

    fn service(delay: Duration) -> ChatService {
        ChatService::new(fixed_clock(), Arc::new(CannedTutor::new(delay)))
    }

    #[tokio::test(start_paused = true)]
    async fn canned_reply_arrives_after_delay() {
        let svc = service(CannedTutor::DEFAULT_DELAY);
        let started = tokio::time::Instant::now();
        let outcome = svc
            .send(ChatRequest::new(
                "Explain this concept step by step",
                Some("AP Chemistry".into()),
            ))
            .await
            .unwrap();
        assert!(started.elapsed() >= CannedTutor::DEFAULT_DELAY);

        let ChatOutcome::Delivered(message) = outcome else {
            panic!("expected a reply");
        };
        assert_eq!(message.role, ChatRole::Assistant);
        assert_eq!(message.sent_at, fixed_now());
        assert!(message.content.contains("\"Explain this concept step by step...\""));
        assert!(message.content.contains("fundamental principles in AP Chemistry."));
    }

    #[tokio::test]
    async fn reply_quotes_at_most_fifty_chars_and_defaults_subject() {
        let svc = service(Duration::ZERO);
        let prompt = "x".repeat(80);
        let ChatOutcome::Delivered(message) =
            svc.send(ChatRequest::new(prompt, None)).await.unwrap()
        else {
            panic!("expected a reply");
        };
        assert!(message.content.contains(&format!("\"{}...\"", "x".repeat(50))));
        assert!(!message.content.contains(&"x".repeat(51)));
        assert!(message.content.contains("principles in AP studies."));
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected() {
        let svc = service(Duration::ZERO);
        let err = svc.send(ChatRequest::new("  \n", None)).await.unwrap_err();
        assert!(matches!(err, TutorError::EmptyPrompt));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_reply() {
        let svc = service(CannedTutor::DEFAULT_DELAY);
        let (outcome, ()) = tokio::join!(
            svc.send(ChatRequest::new("What are common mistakes to avoid?", None)),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                svc.cancel();
            }
        );
        assert_eq!(outcome.unwrap(), ChatOutcome::Stale);
    }
}
