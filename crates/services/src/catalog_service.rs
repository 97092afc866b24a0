use std::sync::Arc;

use ap_core::model::{Question, Subject, SubjectId, Unit, UnitId};
use storage::repository::{CatalogRepository, StorageError};

use crate::error::CatalogServiceError;

/// Dashboard totals over the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOverview {
    pub subjects: usize,
    pub units: usize,
    pub question_hint: u32,
    /// Mean subject progress, rounded down.
    pub average_progress: u8,
}

/// Read-only access to subjects, units and questions.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

fn found<T>(result: Result<T, StorageError>) -> Result<Option<T>, CatalogServiceError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound) => Ok(None),
        Err(other) => Err(other.into()),
    }
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, CatalogServiceError> {
        Ok(self.catalog.list_subjects().await?)
    }

    /// Fetch a subject by id. Returns `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn get_subject(&self, id: &SubjectId) -> Result<Option<Subject>, CatalogServiceError> {
        found(self.catalog.get_subject(id).await)
    }

    /// Fetch a unit by id. Returns `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn get_unit(&self, id: &UnitId) -> Result<Option<Unit>, CatalogServiceError> {
        found(self.catalog.get_unit(id).await)
    }

    /// Units of a subject; `Ok(None)` for an unknown subject.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn list_units(
        &self,
        subject_id: &SubjectId,
    ) -> Result<Option<Vec<Unit>>, CatalogServiceError> {
        found(self.catalog.list_units(subject_id).await)
    }

    /// Questions of a unit; `Ok(None)` for an unknown unit.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn list_questions(
        &self,
        unit_id: &UnitId,
    ) -> Result<Option<Vec<Question>>, CatalogServiceError> {
        found(self.catalog.list_questions(unit_id).await)
    }

    /// Resolve a unit together with its owning subject.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn locate_unit(
        &self,
        unit_id: &UnitId,
    ) -> Result<Option<(Subject, Unit)>, CatalogServiceError> {
        let Some(unit) = self.get_unit(unit_id).await? else {
            return Ok(None);
        };
        let subject = self.get_subject(unit.subject_id()).await?;
        Ok(subject.map(|subject| (subject, unit)))
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn overview(&self) -> Result<CatalogOverview, CatalogServiceError> {
        let subjects = self.list_subjects().await?;
        let units = subjects.iter().map(|s| s.units().len()).sum();
        let question_hint = subjects.iter().map(Subject::question_count_hint).sum();
        let progress_total: usize = subjects.iter().map(|s| usize::from(s.progress())).sum();
        let average_progress = progress_total
            .checked_div(subjects.len())
            .and_then(|avg| u8::try_from(avg).ok())
            .unwrap_or(0);
        Ok(CatalogOverview {
            subjects: subjects.len(),
            units,
            question_hint,
            average_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_core::time::fixed_clock;
    use storage::repository::Storage;

    fn service() -> CatalogService {
        let storage = Storage::seeded(fixed_clock().today()).unwrap();
        CatalogService::new(storage.catalog)
    }

    #[tokio::test]
    async fn unknown_ids_resolve_to_none() {
        let svc = service();
        assert!(svc.get_subject(&SubjectId::new("ap-latin")).await.unwrap().is_none());
        assert!(svc.get_unit(&UnitId::new("latin-1")).await.unwrap().is_none());
        assert!(svc.list_questions(&UnitId::new("latin-1")).await.unwrap().is_none());
        assert!(svc.locate_unit(&UnitId::new("latin-1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn locate_unit_returns_owner() {
        let svc = service();
        let (subject, unit) = svc
            .locate_unit(&UnitId::new("calc-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(subject.id().as_str(), "ap-calculus-ab");
        assert_eq!(unit.title(), "Unit 1: Limits and Continuity");
    }

    #[tokio::test]
    async fn known_unit_without_questions_is_empty() {
        let svc = service();
        let questions = svc
            .list_questions(&UnitId::new("chem-9"))
            .await
            .unwrap()
            .unwrap();
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn overview_totals_the_catalog() {
        let overview = service().overview().await.unwrap();
        assert_eq!(overview.subjects, 8);
        assert_eq!(overview.units, 62);
        // (45 + 62 + 38 + 28 + 52 + 35 + 55 + 42) / 8
        assert_eq!(overview.average_progress, 44);
    }
}
