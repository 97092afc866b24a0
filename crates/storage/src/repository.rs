use ap_core::model::{PlannerTask, Question, Subject, SubjectId, TaskId, Unit, UnitId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),
}

/// Read access to subjects, units and questions.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All subjects in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` for an unknown id.
    async fn get_subject(&self, id: &SubjectId) -> Result<Subject, StorageError>;

    /// Units of one subject in syllabus order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` for an unknown subject.
    async fn list_units(&self, subject_id: &SubjectId) -> Result<Vec<Unit>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` for an unknown id.
    async fn get_unit(&self, id: &UnitId) -> Result<Unit, StorageError>;

    /// Questions whose unit id equals `unit_id` exactly. A known unit with no
    /// questions yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` for an unknown unit.
    async fn list_questions(&self, unit_id: &UnitId) -> Result<Vec<Question>, StorageError>;
}

/// Storage for study planner tasks.
#[async_trait]
pub trait PlannerRepository: Send + Sync {
    /// All tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn list_tasks(&self) -> Result<Vec<PlannerTask>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` for an unknown id.
    async fn get_task(&self, id: &TaskId) -> Result<PlannerTask, StorageError>;

    /// Store a new task.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the id is taken.
    async fn insert_task(&self, task: &PlannerTask) -> Result<(), StorageError>;

    /// Insert or replace a task.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the task cannot be stored.
    async fn upsert_task(&self, task: &PlannerTask) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for the mock catalog and tests.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    subjects: Arc<Mutex<Vec<Subject>>>,
    questions: Arc<Mutex<HashMap<UnitId, Vec<Question>>>>,
    tasks: Arc<Mutex<Vec<PlannerTask>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Connection(e.to_string()))
}

fn upsert_by<T, K: PartialEq>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> &K) {
    match items.iter().position(|existing| key(existing) == key(&item)) {
        Some(pos) => items[pos] = item,
        None => items.push(item),
    }
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository already holding the given records.
    ///
    /// Questions are grouped by their unit id; order within a unit is kept.
    #[must_use]
    pub fn with_records(
        subjects: Vec<Subject>,
        questions: Vec<Question>,
        tasks: Vec<PlannerTask>,
    ) -> Self {
        let mut by_unit: HashMap<UnitId, Vec<Question>> = HashMap::new();
        for question in questions {
            by_unit
                .entry(question.unit_id().clone())
                .or_default()
                .push(question);
        }
        Self {
            subjects: Arc::new(Mutex::new(subjects)),
            questions: Arc::new(Mutex::new(by_unit)),
            tasks: Arc::new(Mutex::new(tasks)),
        }
    }

    fn find_unit(subjects: &[Subject], id: &UnitId) -> Option<Unit> {
        subjects.iter().find_map(|s| s.unit(id)).cloned()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryRepository {
    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError> {
        Ok(lock(&self.subjects)?.clone())
    }

    async fn get_subject(&self, id: &SubjectId) -> Result<Subject, StorageError> {
        let guard = lock(&self.subjects)?;
        guard
            .iter()
            .find(|s| s.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn list_units(&self, subject_id: &SubjectId) -> Result<Vec<Unit>, StorageError> {
        let guard = lock(&self.subjects)?;
        guard
            .iter()
            .find(|s| s.id() == subject_id)
            .map(|s| s.units().to_vec())
            .ok_or(StorageError::NotFound)
    }

    async fn get_unit(&self, id: &UnitId) -> Result<Unit, StorageError> {
        let guard = lock(&self.subjects)?;
        Self::find_unit(&guard, id).ok_or(StorageError::NotFound)
    }

    async fn list_questions(&self, unit_id: &UnitId) -> Result<Vec<Question>, StorageError> {
        if Self::find_unit(&lock(&self.subjects)?, unit_id).is_none() {
            return Err(StorageError::NotFound);
        }
        let guard = lock(&self.questions)?;
        Ok(guard.get(unit_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl PlannerRepository for InMemoryRepository {
    async fn list_tasks(&self) -> Result<Vec<PlannerTask>, StorageError> {
        Ok(lock(&self.tasks)?.clone())
    }

    async fn get_task(&self, id: &TaskId) -> Result<PlannerTask, StorageError> {
        let guard = lock(&self.tasks)?;
        guard
            .iter()
            .find(|t| t.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn insert_task(&self, task: &PlannerTask) -> Result<(), StorageError> {
        let mut guard = lock(&self.tasks)?;
        if guard.iter().any(|t| t.id() == task.id()) {
            return Err(StorageError::Conflict);
        }
        guard.push(task.clone());
        Ok(())
    }

    async fn upsert_task(&self, task: &PlannerTask) -> Result<(), StorageError> {
        let mut guard = lock(&self.tasks)?;
        upsert_by(&mut *guard, task.clone(), PlannerTask::id);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
    pub planner: Arc<dyn PlannerRepository>,
}

impl Storage {
    /// Empty in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let catalog: Arc<dyn CatalogRepository> = Arc::new(repo.clone());
        let planner: Arc<dyn PlannerRepository> = Arc::new(repo);
        Self { catalog, planner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_core::model::{
        Difficulty, PlannerTaskDraft, QuestionDraft, QuestionId, SubjectDraft, UnitDraft,
    };
    use ap_core::time::fixed_clock;

    fn build_subject() -> Subject {
        let subject_id = SubjectId::new("ap-chemistry");
        let unit = |id: &str| UnitDraft {
            id: UnitId::new(id),
            subject_id: subject_id.clone(),
            title: format!("Unit {id}"),
            description: String::new(),
            question_count: 10,
            progress: 0,
        };
        SubjectDraft {
            id: subject_id.clone(),
            title: "AP Chemistry".into(),
            short_title: "AP Chem".into(),
            description: String::new(),
            icon: "⚗️".into(),
            color: "#4CAF50".into(),
            progress: 0,
            units: vec![unit("chem-1"), unit("chem-10"), unit("chem-2")],
        }
        .validate()
        .unwrap()
    }

    fn build_question(id: &str, unit: &str) -> Question {
        QuestionDraft {
            id: QuestionId::new(id),
            unit_id: UnitId::new(unit),
            text: "Which?".into(),
            choices: vec!["a".into(), "b".into()],
            correct_answer: 0,
            difficulty: Difficulty::Easy,
            topic: "Topic".into(),
            explanation: "Because.".into(),
        }
        .validate()
        .unwrap()
    }

    fn build_task(id: &str) -> PlannerTask {
        PlannerTaskDraft {
            title: "Review".into(),
            subject_id: SubjectId::new("ap-chemistry"),
            unit_id: None,
            date: fixed_clock().today(),
            duration_minutes: 30,
        }
        .validate(TaskId::new(id))
        .unwrap()
    }

    #[tokio::test]
    async fn questions_match_unit_id_exactly() {
        let repo = InMemoryRepository::with_records(
            vec![build_subject()],
            vec![
                build_question("q1", "chem-1"),
                build_question("q2", "chem-10"),
                build_question("q3", "chem-1"),
            ],
            Vec::new(),
        );

        let ids: Vec<String> = repo
            .list_questions(&UnitId::new("chem-1"))
            .await
            .unwrap()
            .iter()
            .map(|q| q.id().to_string())
            .collect();
        assert_eq!(ids, vec!["q1", "q3"]);

        let empty = repo.list_questions(&UnitId::new("chem-2")).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let repo = InMemoryRepository::with_records(vec![build_subject()], Vec::new(), Vec::new());
        assert!(matches!(
            repo.get_subject(&SubjectId::new("ap-latin")).await,
            Err(StorageError::NotFound)
        ));
        assert!(matches!(
            repo.get_unit(&UnitId::new("chem-99")).await,
            Err(StorageError::NotFound)
        ));
        assert!(matches!(
            repo.list_questions(&UnitId::new("chem-99")).await,
            Err(StorageError::NotFound)
        ));
        assert!(matches!(
            repo.list_units(&SubjectId::new("ap-latin")).await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn insert_task_rejects_duplicate_ids() {
        let storage = Storage::in_memory();
        storage.planner.insert_task(&build_task("t1")).await.unwrap();
        let err = storage
            .planner
            .insert_task(&build_task("t1"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict));

        let toggled = build_task("t1").with_completed(true);
        storage.planner.upsert_task(&toggled).await.unwrap();
        let fetched = storage.planner.get_task(&TaskId::new("t1")).await.unwrap();
        assert!(fetched.is_completed());
        assert_eq!(storage.planner.list_tasks().await.unwrap().len(), 1);
    }
}
