mod catalog_vm;
mod chat_vm;
mod date_fmt;
mod directions_vm;
mod exam_vm;
mod navigator_vm;
mod planner_vm;
mod streak_vm;
mod tutor_vm;

pub use catalog_vm::{
    HomeVm, StatVm, SubjectCardVm, UnitRowVm, map_home, map_subject_cards, map_unit_rows,
};
pub use chat_vm::{ChatRowVm, ChatVm, QUICK_PROMPTS, SubjectOptionVm, map_subject_options};
pub use date_fmt::{format_clock, format_day, format_minutes};
pub use directions_vm::{DirectionItemVm, DirectionsVm, map_directions};
pub use exam_vm::{ChoiceVm, ExamIntent, ExamVm, FeedbackVm, PracticeMode, QuestionCardVm};
pub use navigator_vm::{NavigatorCellVm, NavigatorVm, map_navigator};
pub use planner_vm::{PlannerVm, TaskRowVm, map_planner};
pub use streak_vm::{MilestoneVm, StreakVm, map_streak};
pub use tutor_vm::{TutorPhase, TutorTab, TutorVm};
