use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{StreakVm, map_streak};

#[component]
pub fn StreakView() -> Element {
    let ctx = use_context::<AppContext>();
    let streak = ctx.streak();

    let resource = use_resource(move || {
        let streak = streak.clone();
        async move { Ok::<StreakVm, ViewError>(map_streak(&streak.snapshot()?)) }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page streak-page",
            header { class: "view-header",
                h2 { class: "view-title", "Study Streak" }
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
                ViewState::Ready(vm) => rsx! {
                    section { class: "{vm.cookie_class}",
                        span { class: "cookie-emoji", "{vm.emoji}" }
                        if vm.on_fire {
                            span { class: "cookie-fire", "🔥" }
                        }
                        h3 { "{vm.count_label}" }
                        p { class: "streak-status", "{vm.status}" }
                        p { class: "streak-last", "Last studied: {vm.last_studied}" }
                        if let Some(next) = vm.next_milestone {
                            p { class: "streak-next", "{next}" }
                        }
                    }
                    h3 { "Milestones" }
                    ul { class: "milestones",
                        for milestone in vm.milestones {
                            li { class: "{milestone.class}",
                                span { class: "milestone-icon", "{milestone.icon}" }
                                div {
                                    strong { "{milestone.reward}" }
                                    span { class: "milestone-days", "{milestone.days_label}" }
                                    p { "{milestone.description}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
