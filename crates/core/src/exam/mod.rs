mod error;
pub mod interaction;
mod session;
mod status;

pub use error::{ExamError, TransitionError};
pub use interaction::{BluebookStyle, ChoiceCommand, ChoiceGesture, FlashcardStyle, InteractionStyle};
pub use session::{ExamSession, QuestionPhase, QuestionState};
pub use status::{QuestionStatus, StatusSummary};
