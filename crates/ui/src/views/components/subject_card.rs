use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::SubjectCardVm;

#[component]
pub fn SubjectCard(card: SubjectCardVm) -> Element {
    rsx! {
        Link {
            class: "subject-card",
            to: Route::SubjectDetail { subject_id: card.id.clone() },
            div { class: "subject-card-inner", style: "{card.accent_style}",
                span { class: "subject-icon", "{card.icon}" }
                h3 { "{card.title}" }
                p { class: "subject-description", "{card.description}" }
                div { class: "progress",
                    div { class: "progress-bar", style: "width: {card.progress}%;" }
                }
                p { class: "subject-meta", "{card.units_label} · {card.progress_label}" }
            }
        }
    }
}
