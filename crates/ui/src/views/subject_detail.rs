use ap_core::model::SubjectId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SubjectCardVm, UnitRowVm, map_unit_rows};

#[derive(Clone, Debug, PartialEq)]
struct SubjectDetailData {
    subject: SubjectCardVm,
    units: Vec<UnitRowVm>,
}

#[component]
pub fn SubjectDetailView(subject_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let subject_id = SubjectId::new(subject_id.clone());
        async move {
            let subject = catalog
                .get_subject(&subject_id)
                .await?
                .ok_or(ViewError::NotFound)?;
            Ok::<_, ViewError>(SubjectDetailData {
                units: map_unit_rows(subject.units()),
                subject: SubjectCardVm::from(&subject),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page subject-page",
            Link { class: "back-link", to: Route::Subjects {}, "← All Subjects" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    header { class: "view-header", style: "{data.subject.accent_style}",
                        h2 { class: "view-title", "{data.subject.icon} {data.subject.title}" }
                        p { class: "view-subtitle", "{data.subject.description}" }
                        p { class: "subject-meta", "{data.subject.units_label} · {data.subject.progress_label}" }
                    }
                    ul { class: "unit-list",
                        for unit in data.units {
                            li { key: "{unit.id}", class: "unit-row",
                                div { class: "unit-info",
                                    h3 { "{unit.title}" }
                                    p { "{unit.description}" }
                                    p { class: "unit-meta", "{unit.questions_label} · {unit.progress}%" }
                                    div { class: "progress",
                                        div { class: "progress-bar", style: "{unit.progress_style}" }
                                    }
                                }
                                div { class: "unit-actions",
                                    Link {
                                        class: "btn btn-primary",
                                        to: Route::Practice { unit_id: unit.id.clone() },
                                        "Practice"
                                    }
                                    Link {
                                        class: "btn btn-secondary",
                                        to: Route::Exam { unit_id: unit.id.clone() },
                                        "Exam Mode"
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
