mod chat;
mod components;
mod exam;
mod home;
mod planner;
mod practice;
mod state;
mod streak;
mod subject_detail;
mod subjects;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chat::ChatView;
pub use exam::ExamView;
pub use home::HomeView;
pub use planner::PlannerView;
pub use practice::PracticeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use streak::StreakView;
pub use subject_detail::SubjectDetailView;
pub use subjects::SubjectsView;
