use std::sync::Arc;

use services::{
    AppServices, CatalogService, ChatService, PlannerService, PracticeService, StreakService,
    TutorService,
};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn practice(&self) -> Arc<PracticeService>;
    fn tutor(&self) -> Arc<TutorService>;
    fn chat(&self) -> Arc<ChatService>;
    fn streak(&self) -> Arc<StreakService>;
    fn planner(&self) -> Arc<PlannerService>;
}

impl UiApp for AppServices {
    fn catalog(&self) -> Arc<CatalogService> {
        AppServices::catalog(self)
    }

    fn practice(&self) -> Arc<PracticeService> {
        AppServices::practice(self)
    }

    fn tutor(&self) -> Arc<TutorService> {
        AppServices::tutor(self)
    }

    fn chat(&self) -> Arc<ChatService> {
        AppServices::chat(self)
    }

    fn streak(&self) -> Arc<StreakService> {
        AppServices::streak(self)
    }

    fn planner(&self) -> Arc<PlannerService> {
        AppServices::planner(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogService>,
    practice: Arc<PracticeService>,
    tutor: Arc<TutorService>,
    chat: Arc<ChatService>,
    streak: Arc<StreakService>,
    planner: Arc<PlannerService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            practice: app.practice(),
            tutor: app.tutor(),
            chat: app.chat(),
            streak: app.streak(),
            planner: app.planner(),
        }
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
