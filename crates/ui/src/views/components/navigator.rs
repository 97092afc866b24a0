use dioxus::prelude::*;

use crate::vm::NavigatorVm;

/// Grid of question numbers with status colors; clicking a cell jumps there.
#[component]
pub fn QuestionNavigator(nav: NavigatorVm, on_jump: EventHandler<usize>) -> Element {
    rsx! {
        section { class: "navigator",
            div { class: "nav-grid",
                for cell in nav.cells {
                    button {
                        key: "{cell.index}",
                        class: "{cell.class}",
                        r#type: "button",
                        title: "{cell.title}",
                        onclick: move |_| on_jump.call(cell.index),
                        "{cell.label}"
                        if cell.marked {
                            span { class: "nav-flag", "⚑" }
                        }
                    }
                }
            }
            ul { class: "nav-summary",
                li { "{nav.answered_label}" }
                li { "{nav.review_label}" }
                li { "{nav.remaining_label}" }
                if let Some(accuracy) = nav.accuracy_label {
                    li { "{accuracy}" }
                }
            }
            if let Some(complete) = nav.complete_label {
                p { class: "nav-complete", "{complete}" }
            }
        }
    }
}
