//! Shared error types for the services crate.

use thiserror::Error;

use ap_core::exam::ExamError;
use ap_core::model::{PlannerError, UnitId};
use storage::repository::StorageError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `StreakService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StreakError {
    #[error("streak state is unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `PracticeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("unit {0} not found")]
    UnitNotFound(UnitId),
    #[error("no questions available for unit {0}")]
    Empty(UnitId),
    #[error(transparent)]
    Exam(#[from] ExamError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by help dispatchers and `TutorService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorError {
    #[error("tutor is unavailable: {0}")]
    Unavailable(String),
    #[error("tutor returned an empty response")]
    EmptyResponse,
    #[error("message is empty")]
    EmptyPrompt,
}

/// Errors emitted by `PlannerService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlannerServiceError {
    #[error(transparent)]
    Task(#[from] PlannerError),
    #[error("no planner task ids left")]
    IdsExhausted,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("seed data is invalid: {0}")]
    Seed(#[from] ap_core::Error),
}
