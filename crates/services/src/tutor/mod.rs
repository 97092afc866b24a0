//! Placeholder AI tutor: per-question help and an open chat, both async, plus
//! stale-response tracking so late answers never land in the wrong place.

mod chat;
mod dispatcher;
mod service;
mod tracker;

pub use chat::{ChatDispatcher, ChatMessage, ChatOutcome, ChatRequest, ChatRole, ChatService};
pub use dispatcher::{CannedTutor, HelpDispatcher, HelpRequest, TutorHelp};
pub use service::{HelpOutcome, TutorService};
pub use tracker::{HelpTicket, HelpTracker};
