use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::SubjectCard;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SubjectCardVm, map_subject_cards};

#[component]
pub fn SubjectsView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let subjects = catalog.list_subjects().await?;
            Ok::<Vec<SubjectCardVm>, ViewError>(map_subject_cards(&subjects))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "AP Subjects" }
                p { class: "view-subtitle", "Choose a course to browse its units." }
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
                ViewState::Ready(cards) => rsx! {
                    div { class: "subject-grid",
                        for card in cards {
                            SubjectCard { card }
                        }
                    }
                },
            }
        }
    }
}
