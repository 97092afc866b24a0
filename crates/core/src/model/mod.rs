mod catalog;
mod ids;
mod planner;
mod question;
mod streak;

pub use ids::{ParseIdError, QuestionId, SubjectId, TaskId, UnitId};

pub use catalog::{CatalogError, Subject, SubjectDraft, Unit, UnitDraft};
pub use planner::{PlannerError, PlannerTask, PlannerTaskDraft};
pub use question::{Difficulty, Question, QuestionDraft, QuestionError, choice_label};
pub use streak::{CookieLevel, MILESTONES, Milestone, Streak, StreakChange};
