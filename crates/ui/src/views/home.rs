use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::SubjectCard;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HomeVm, map_home};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let streak = ctx.streak();
    let planner = ctx.planner();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let streak = streak.clone();
        let planner = planner.clone();
        async move {
            let overview = catalog.overview().await?;
            let subjects = catalog.list_subjects().await?;
            let snapshot = streak.snapshot()?;
            let progress = planner.progress().await?;
            Ok::<HomeVm, ViewError>(map_home(&overview, &snapshot, progress, &subjects))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Welcome back" }
                p { class: "view-subtitle", "Pick up where you left off." }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(home) => rsx! {
                    Link { class: "streak-badge", to: Route::Streak {}, "{home.streak_badge}" }
                    ul { class: "stats",
                        for stat in home.stats {
                            li { class: "stat",
                                span { class: "stat-value", "{stat.value}" }
                                span { class: "stat-label", "{stat.label}" }
                            }
                        }
                    }
                    h3 { "Your Subjects" }
                    div { class: "subject-grid",
                        for card in home.subjects {
                            SubjectCard { card }
                        }
                    }
                },
            }
        }
    }
}
