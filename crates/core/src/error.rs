use thiserror::Error;

use crate::exam::ExamError;
use crate::model::{CatalogError, ParseIdError, PlannerError, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Exam(#[from] ExamError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Planner(#[from] PlannerError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}
