use std::env;
use std::sync::Arc;
use std::time::Duration;

use storage::repository::Storage;
use storage::seed;
use tracing::warn;

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::planner_service::PlannerService;
use crate::practice::PracticeService;
use crate::streak_service::StreakService;
use crate::tutor::{CannedTutor, ChatService, HelpDispatcher, TutorService};

/// Runtime knobs for the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub tutor_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tutor_delay: CannedTutor::DEFAULT_DELAY,
        }
    }
}

impl AppConfig {
    pub const TUTOR_DELAY_ENV: &'static str = "AP_PREP_TUTOR_DELAY_MS";

    /// Defaults overridden by `AP_PREP_TUTOR_DELAY_MS`. An unparsable value
    /// is ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var(Self::TUTOR_DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.tutor_delay = Duration::from_millis(ms),
                Err(_) => warn!(value = %raw, "ignoring invalid {}", Self::TUTOR_DELAY_ENV),
            }
        }
        config
    }

    #[must_use]
    pub fn with_tutor_delay(mut self, delay: Duration) -> Self {
        self.tutor_delay = delay;
        self
    }
}

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    catalog: Arc<CatalogService>,
    practice: Arc<PracticeService>,
    tutor: Arc<TutorService>,
    chat: Arc<ChatService>,
    streak: Arc<StreakService>,
    planner: Arc<PlannerService>,
}

impl AppServices {
    /// Build services over the seeded in-memory catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Seed` if the built-in data fails validation.
    pub fn in_memory(clock: Clock, config: AppConfig) -> Result<Self, AppServicesError> {
        let today = clock.today();
        let storage = Storage::seeded(today)?;
        let streak = Arc::new(StreakService::new(clock, seed::streak(today)));
        let canned = Arc::new(CannedTutor::new(config.tutor_delay));
        let tutor = Arc::new(TutorService::new(Arc::clone(&canned) as Arc<dyn HelpDispatcher>));
        let chat = Arc::new(ChatService::new(clock, canned));
        Ok(Self::from_parts(clock, storage, streak, tutor, chat))
    }

    /// Build services over any storage and tutors.
    #[must_use]
    pub fn from_parts(
        clock: Clock,
        storage: Storage,
        streak: Arc<StreakService>,
        tutor: Arc<TutorService>,
        chat: Arc<ChatService>,
    ) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::clone(&storage.catalog)));
        let practice = Arc::new(PracticeService::new(
            Arc::clone(&storage.catalog),
            Arc::clone(&streak),
        ));
        let planner = Arc::new(PlannerService::new(clock, Arc::clone(&storage.planner)));
        Self {
            clock,
            catalog,
            practice,
            tutor,
            chat,
            streak,
            planner,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn tutor(&self) -> Arc<TutorService> {
        Arc::clone(&self.tutor)
    }

    #[must_use]
    pub fn chat(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }

    #[must_use]
    pub fn streak(&self) -> Arc<StreakService> {
        Arc::clone(&self.streak)
    }

    #[must_use]
    pub fn planner(&self) -> Arc<PlannerService> {
        Arc::clone(&self.planner)
    }
}
