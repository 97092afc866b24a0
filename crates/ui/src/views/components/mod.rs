mod directions;
mod navigator;
mod question_card;
mod subject_card;
mod tutor_panel;

pub use directions::DirectionsPanel;
pub use navigator::QuestionNavigator;
pub use question_card::QuestionCard;
pub use subject_card::SubjectCard;
pub use tutor_panel::TutorPanel;
