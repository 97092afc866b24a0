use ap_core::model::{PlannerTask, Subject};
use chrono::NaiveDate;
use services::PlannerProgress;

use super::date_fmt::{format_day, format_minutes};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRowVm {
    pub id: String,
    pub title: String,
    pub subject_label: String,
    pub duration_label: String,
    pub completed: bool,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerVm {
    pub heading: String,
    pub tasks: Vec<TaskRowVm>,
    pub progress_label: String,
    pub planned_label: String,
    pub percent: u8,
    pub progress_style: String,
}

fn subject_label(task: &PlannerTask, subjects: &[Subject]) -> String {
    subjects
        .iter()
        .find(|s| s.id() == task.subject_id())
        .map_or_else(|| task.subject_id().to_string(), |s| s.short_title().to_owned())
}

#[must_use]
pub fn map_planner(
    today: NaiveDate,
    tasks: &[PlannerTask],
    progress: PlannerProgress,
    subjects: &[Subject],
) -> PlannerVm {
    let tasks = tasks
        .iter()
        .map(|task| TaskRowVm {
            id: task.id().to_string(),
            title: task.title().to_owned(),
            subject_label: subject_label(task, subjects),
            duration_label: format_minutes(task.duration_minutes()),
            completed: task.is_completed(),
            class: if task.is_completed() {
                "task done"
            } else {
                "task"
            },
        })
        .collect();

    PlannerVm {
        heading: format!("Today · {}", format_day(today)),
        tasks,
        progress_label: format!("{} of {} tasks done", progress.completed, progress.total),
        planned_label: format!("{} planned", format_minutes(progress.planned_minutes)),
        percent: progress.percent(),
        progress_style: format!("width: {}%;", progress.percent()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_core::model::{PlannerTaskDraft, SubjectDraft, SubjectId, TaskId};

    fn task(id: &str, subject: &str, minutes: u32, done: bool) -> PlannerTask {
        PlannerTaskDraft {
            title: format!("Task {id}"),
            subject_id: SubjectId::new(subject),
            unit_id: None,
            date: NaiveDate::from_ymd_opt(2023, 11, 14).unwrap(),
            duration_minutes: minutes,
        }
        .validate(TaskId::new(id))
        .unwrap()
        .with_completed(done)
    }

    #[test]
    fn rows_use_subject_short_titles() {
        let chemistry = SubjectDraft {
            id: SubjectId::new("ap-chemistry"),
            title: "AP Chemistry".into(),
            short_title: "Chemistry".into(),
            description: String::new(),
            icon: "⚗️".into(),
            color: "#f97316".into(),
            progress: 0,
            units: Vec::new(),
        }
        .validate()
        .unwrap();
        let tasks = vec![
            task("t1", "ap-chemistry", 30, false),
            task("t2", "ap-physics", 45, true),
        ];
        let progress = PlannerProgress::from_tasks(&tasks);
        let today = NaiveDate::from_ymd_opt(2023, 11, 14).unwrap();
        let vm = map_planner(today, &tasks, progress, &[chemistry]);

        assert_eq!(vm.heading, "Today · Tue, Nov 14");
        assert_eq!(vm.tasks[0].subject_label, "Chemistry");
        assert_eq!(vm.tasks[1].subject_label, "ap-physics");
        assert_eq!(vm.tasks[1].class, "task done");
        assert_eq!(vm.progress_label, "1 of 2 tasks done");
        assert_eq!(vm.planned_label, "1h 15m planned");
        assert_eq!(vm.progress_style, "width: 50%;");
    }
}
