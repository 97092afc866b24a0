#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod planner_service;
pub mod practice;
pub mod streak_service;
pub mod tutor;

pub use ap_core::Clock;

pub use app_services::{AppConfig, AppServices};
pub use catalog_service::{CatalogOverview, CatalogService};
pub use error::{
    AppServicesError, CatalogServiceError, PlannerServiceError, PracticeError, StreakError,
    TutorError,
};
pub use planner_service::{PlannerProgress, PlannerService};
pub use practice::{DifficultyFilter, PracticeService};
pub use streak_service::{StreakService, StreakSnapshot};
pub use tutor::{
    CannedTutor, ChatDispatcher, ChatMessage, ChatOutcome, ChatRequest, ChatRole, ChatService,
    HelpDispatcher, HelpOutcome, HelpRequest, TutorHelp, TutorService,
};
