use ap_core::model::{Subject, SubjectId};
use chrono::{DateTime, Local, Utc};
use services::{ChatMessage, ChatOutcome, ChatRequest, ChatRole, TutorError};

use super::date_fmt::format_clock;

pub const QUICK_PROMPTS: [&str; 4] = [
    "Explain this concept step by step",
    "Give me a practice problem",
    "What are common mistakes to avoid?",
    "How does this relate to real life?",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectOptionVm {
    pub id: String,
    pub label: String,
}

#[must_use]
pub fn map_subject_options(subjects: &[Subject]) -> Vec<SubjectOptionVm> {
    subjects
        .iter()
        .map(|s| SubjectOptionVm {
            id: s.id().to_string(),
            label: format!("{} {}", s.icon(), s.short_title()),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatRowVm {
    pub class: &'static str,
    pub author: &'static str,
    pub content: String,
    pub time_label: String,
}

/// Conversation state for the tutor chat page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatVm {
    subject: Option<(SubjectId, String)>,
    draft: String,
    messages: Vec<ChatMessage>,
    pending: bool,
    error: Option<String>,
}

impl ChatVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn subject_id(&self) -> Option<&SubjectId> {
        self.subject.as_ref().map(|(id, _)| id)
    }

    pub fn select_subject(&mut self, subject: Option<&Subject>) {
        self.subject = subject.map(|s| (s.id().clone(), s.title().to_owned()));
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Quick prompts only fill the input; the student still sends.
    pub fn use_prompt(&mut self, prompt: &str) {
        self.draft = prompt.to_owned();
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    /// Post the draft as a user message and build the request for it.
    /// Returns `None` while a reply is pending or the draft is blank.
    pub fn begin(&mut self, sent_at: DateTime<Utc>) -> Option<ChatRequest> {
        if !self.can_send() {
            return None;
        }
        let prompt = std::mem::take(&mut self.draft);
        self.messages.push(ChatMessage::user(prompt.clone(), sent_at));
        self.pending = true;
        self.error = None;
        Some(ChatRequest::new(
            prompt,
            self.subject.as_ref().map(|(_, title)| title.clone()),
        ))
    }

    pub fn finish(&mut self, result: Result<ChatOutcome, TutorError>) {
        if !self.pending {
            return;
        }
        match result {
            Ok(ChatOutcome::Delivered(message)) => {
                self.messages.push(message);
                self.pending = false;
            }
            Ok(ChatOutcome::Stale) => {}
            Err(err) => {
                self.error = Some(err.to_string());
                self.pending = false;
            }
        }
    }

    /// Start over. Returns `true` if a pending reply should be cancelled.
    pub fn clear(&mut self) -> bool {
        let was_pending = self.pending;
        let subject = self.subject.take();
        *self = Self::new();
        self.subject = subject;
        was_pending
    }

    #[must_use]
    pub fn rows(&self) -> Vec<ChatRowVm> {
        self.messages
            .iter()
            .map(|message| {
                let (class, author) = match message.role {
                    ChatRole::User => ("message user", "You"),
                    ChatRole::Assistant => ("message assistant", "AI Tutor"),
                };
                ChatRowVm {
                    class,
                    author,
                    content: message.content.clone(),
                    time_label: format_clock(&message.sent_at.with_timezone(&Local)),
                }
            })
            .collect()
    }
}
