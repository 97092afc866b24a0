use dioxus::prelude::*;
use services::{CatalogServiceError, PlannerServiceError, PracticeError, StreakError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotFound,
    EmptySession,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::NotFound => "We couldn't find that page.",
            Self::EmptySession => "No questions available for this unit yet.",
        }
    }
}

impl From<CatalogServiceError> for ViewError {
    fn from(_: CatalogServiceError) -> Self {
        Self::Unknown
    }
}

impl From<PlannerServiceError> for ViewError {
    fn from(_: PlannerServiceError) -> Self {
        Self::Unknown
    }
}

impl From<StreakError> for ViewError {
    fn from(_: StreakError) -> Self {
        Self::Unknown
    }
}

impl From<PracticeError> for ViewError {
    fn from(err: PracticeError) -> Self {
        match err {
            PracticeError::UnitNotFound(_) => Self::NotFound,
            PracticeError::Empty(_) => Self::EmptySession,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
