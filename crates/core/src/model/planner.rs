use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{SubjectId, TaskId, UnitId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlannerError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("task duration must be > 0 minutes")]
    ZeroDuration,
}

/// Unvalidated planner task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerTaskDraft {
    pub title: String,
    pub subject_id: SubjectId,
    pub unit_id: Option<UnitId>,
    pub date: NaiveDate,
    pub duration_minutes: u32,
}

impl PlannerTaskDraft {
    /// # Errors
    ///
    /// Returns `PlannerError` for a blank title or a zero duration.
    pub fn validate(self, id: TaskId) -> Result<PlannerTask, PlannerError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PlannerError::EmptyTitle);
        }
        if self.duration_minutes == 0 {
            return Err(PlannerError::ZeroDuration);
        }
        Ok(PlannerTask {
            id,
            title: title.to_owned(),
            subject_id: self.subject_id,
            unit_id: self.unit_id,
            date: self.date,
            completed: false,
            duration_minutes: self.duration_minutes,
        })
    }
}

/// A scheduled study block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannerTask {
    id: TaskId,
    title: String,
    subject_id: SubjectId,
    unit_id: Option<UnitId>,
    date: NaiveDate,
    completed: bool,
    duration_minutes: u32,
}

impl PlannerTask {
    #[must_use]
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subject_id(&self) -> &SubjectId {
        &self.subject_id
    }

    #[must_use]
    pub fn unit_id(&self) -> Option<&UnitId> {
        self.unit_id.as_ref()
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Flip completion and return the new value.
    pub fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PlannerTaskDraft {
        PlannerTaskDraft {
            title: "  Review Unit 1 Flashcards ".into(),
            subject_id: SubjectId::new("ap-chemistry"),
            unit_id: Some(UnitId::new("chem-1")),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            duration_minutes: 30,
        }
    }

    #[test]
    fn validate_trims_title_and_starts_open() {
        let task = draft().validate(TaskId::new("t1")).unwrap();
        assert_eq!(task.title(), "Review Unit 1 Flashcards");
        assert!(!task.is_completed());
    }

    #[test]
    fn validate_rejects_bad_input() {
        let mut d = draft();
        d.title = " ".into();
        assert_eq!(d.validate(TaskId::new("t1")), Err(PlannerError::EmptyTitle));

        let mut d = draft();
        d.duration_minutes = 0;
        assert_eq!(d.validate(TaskId::new("t1")), Err(PlannerError::ZeroDuration));
    }

    #[test]
    fn toggle_flips_completion() {
        let mut task = draft().validate(TaskId::new("t1")).unwrap();
        assert!(task.toggle_completed());
        assert!(!task.toggle_completed());
    }
}
