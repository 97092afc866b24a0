use std::sync::Arc;
use std::time::Duration;

use ap_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppConfig, AppServices};

use crate::context::{UiApp, build_app_context};
use crate::views::{
    ChatView, ExamView, HomeView, PlannerView, PracticeView, StreakView, SubjectDetailView,
    SubjectsView,
};

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Subjects,
    SubjectDetail(&'static str),
    Practice(&'static str),
    Exam(&'static str),
    Streak,
    Planner,
    Chat,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Subjects => rsx! { SubjectsView {} },
        ViewKind::SubjectDetail(id) => rsx! { SubjectDetailView { subject_id: id.to_string() } },
        ViewKind::Practice(id) => rsx! { PracticeView { unit_id: id.to_string() } },
        ViewKind::Exam(id) => rsx! { ExamView { unit_id: id.to_string() } },
        ViewKind::Streak => rsx! { StreakView {} },
        ViewKind::Planner => rsx! { PlannerView {} },
        ViewKind::Chat => rsx! { ChatView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: Arc<AppServices>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let pending resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let config = AppConfig::default().with_tutor_delay(Duration::ZERO);
    let services = Arc::new(AppServices::in_memory(fixed_clock(), config).expect("seed services"));
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&services),
            view,
        },
    );
    ViewHarness { dom, services }
}
