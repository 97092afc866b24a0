use std::sync::Arc;

use ap_core::model::{PlannerTask, PlannerTaskDraft, TaskId};
use chrono::NaiveDate;
use storage::repository::PlannerRepository;
use tracing::info;

use crate::Clock;
use crate::error::PlannerServiceError;

/// Completion counters for a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlannerProgress {
    pub completed: usize,
    pub total: usize,
    pub planned_minutes: u32,
}

impl PlannerProgress {
    #[must_use]
    pub fn from_tasks(tasks: &[PlannerTask]) -> Self {
        Self {
            completed: tasks.iter().filter(|t| t.is_completed()).count(),
            total: tasks.len(),
            planned_minutes: tasks.iter().map(PlannerTask::duration_minutes).sum(),
        }
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        u8::try_from(self.completed * 100 / self.total).unwrap_or(100)
    }
}

/// Study planner over a task repository.
#[derive(Clone)]
pub struct PlannerService {
    clock: Clock,
    tasks: Arc<dyn PlannerRepository>,
}

impl PlannerService {
    #[must_use]
    pub fn new(clock: Clock, tasks: Arc<dyn PlannerRepository>) -> Self {
        Self { clock, tasks }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// # Errors
    ///
    /// Returns `PlannerServiceError::Storage` if repository access fails.
    pub async fn list_tasks(&self) -> Result<Vec<PlannerTask>, PlannerServiceError> {
        Ok(self.tasks.list_tasks().await?)
    }

    /// Tasks scheduled on `date`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerServiceError::Storage` if repository access fails.
    pub async fn tasks_on(&self, date: NaiveDate) -> Result<Vec<PlannerTask>, PlannerServiceError> {
        let mut tasks = self.list_tasks().await?;
        tasks.retain(|t| t.date() == date);
        Ok(tasks)
    }

    /// # Errors
    ///
    /// Returns `PlannerServiceError::Storage` if repository access fails.
    pub async fn today_tasks(&self) -> Result<Vec<PlannerTask>, PlannerServiceError> {
        self.tasks_on(self.today()).await
    }

    /// Validate and store a new task under the next free `t{n}` id.
    ///
    /// # Errors
    ///
    /// - `PlannerServiceError::Task` for invalid input
    /// - `PlannerServiceError::IdsExhausted` when no `t{n}` id is left
    /// - `PlannerServiceError::Storage` if persistence fails
    pub async fn add_task(&self, draft: PlannerTaskDraft) -> Result<PlannerTask, PlannerServiceError> {
        let existing = self.list_tasks().await?;
        let next = existing
            .iter()
            .filter_map(|t| t.id().as_str().strip_prefix('t')?.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(PlannerServiceError::IdsExhausted)?;
        let task = draft.validate(TaskId::new(format!("t{next}")))?;
        self.tasks.insert_task(&task).await?;
        info!(task = %task.id(), date = %task.date(), "planner task added");
        Ok(task)
    }

    /// Flip a task's completion and return the updated task.
    ///
    /// # Errors
    ///
    /// Returns `PlannerServiceError::Storage` (`NotFound` for an unknown id).
    pub async fn toggle_task(&self, id: &TaskId) -> Result<PlannerTask, PlannerServiceError> {
        let mut task = self.tasks.get_task(id).await?;
        task.toggle_completed();
        self.tasks.upsert_task(&task).await?;
        Ok(task)
    }

    /// Progress over today's tasks.
    ///
    /// # Errors
    ///
    /// Returns `PlannerServiceError::Storage` if repository access fails.
    pub async fn progress(&self) -> Result<PlannerProgress, PlannerServiceError> {
        Ok(PlannerProgress::from_tasks(&self.today_tasks().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_core::model::{PlannerError, SubjectId};
    use ap_core::time::fixed_clock;
    use storage::repository::{Storage, StorageError};

    fn service() -> PlannerService {
        let clock = fixed_clock();
        let storage = Storage::seeded(clock.today()).unwrap();
        PlannerService::new(clock, storage.planner)
    }

    fn draft(date: NaiveDate) -> PlannerTaskDraft {
        PlannerTaskDraft {
            title: "Practice FRQs".into(),
            subject_id: SubjectId::new("ap-biology"),
            unit_id: None,
            date,
            duration_minutes: 25,
        }
    }

    #[tokio::test]
    async fn seeded_progress_counts_today() {
        let progress = service().progress().await.unwrap();
        assert_eq!(
            progress,
            PlannerProgress {
                completed: 1,
                total: 3,
                planned_minutes: 135,
            }
        );
        assert_eq!(progress.percent(), 33);
    }

    #[tokio::test]
    async fn add_task_assigns_next_id() {
        let svc = service();
        let tomorrow = svc.today().succ_opt().unwrap();
        let task = svc.add_task(draft(tomorrow)).await.unwrap();
        assert_eq!(task.id().as_str(), "t4");
        assert_eq!(svc.list_tasks().await.unwrap().len(), 4);
        assert_eq!(svc.today_tasks().await.unwrap().len(), 3);
        assert_eq!(svc.tasks_on(tomorrow).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn add_task_rejects_invalid_draft() {
        let svc = service();
        let mut bad = draft(svc.today());
        bad.duration_minutes = 0;
        let err = svc.add_task(bad).await.unwrap_err();
        assert!(matches!(err, PlannerServiceError::Task(PlannerError::ZeroDuration)));
    }

    #[tokio::test]
    async fn add_task_near_id_limit_does_not_overflow() {
        let clock = fixed_clock();
        let storage = Storage::in_memory();
        let svc = PlannerService::new(clock, Arc::clone(&storage.planner));
        let today = clock.today();

        let high = draft(today).validate(TaskId::new("t4294967295")).unwrap();
        storage.planner.insert_task(&high).await.unwrap();
        let task = svc.add_task(draft(today)).await.unwrap();
        assert_eq!(task.id().as_str(), "t4294967296");

        let last = draft(today)
            .validate(TaskId::new(format!("t{}", u64::MAX)))
            .unwrap();
        storage.planner.insert_task(&last).await.unwrap();
        let err = svc.add_task(draft(today)).await.unwrap_err();
        assert!(matches!(err, PlannerServiceError::IdsExhausted));
        assert_eq!(svc.list_tasks().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn toggle_task_persists() {
        let svc = service();
        let task = svc.toggle_task(&TaskId::new("t1")).await.unwrap();
        assert!(task.is_completed());
        assert_eq!(svc.progress().await.unwrap().completed, 2);

        let err = svc.toggle_task(&TaskId::new("t99")).await.unwrap_err();
        assert!(matches!(err, PlannerServiceError::Storage(StorageError::NotFound)));
    }
}
