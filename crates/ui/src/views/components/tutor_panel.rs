use dioxus::prelude::*;

use crate::vm::{TutorPhase, TutorTab, TutorVm};

#[component]
pub fn TutorPanel(
    tutor: TutorVm,
    on_ask: EventHandler<()>,
    on_close: EventHandler<()>,
    on_tab: EventHandler<TutorTab>,
    on_attempt: EventHandler<String>,
) -> Element {
    let selected = tutor.tab();
    rsx! {
        aside { class: "tutor-panel",
            header { class: "tutor-header",
                h3 { "AI Tutor" }
                if *tutor.phase() != TutorPhase::Idle {
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
            match tutor.phase() {
                TutorPhase::Idle => rsx! {
                    textarea {
                        class: "tutor-attempt",
                        placeholder: "Explain your thinking (optional)",
                        value: "{tutor.attempt()}",
                        oninput: move |evt: FormEvent| on_attempt.call(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_ask.call(()),
                        "Get Help"
                    }
                },
                TutorPhase::Loading => rsx! {
                    p { class: "tutor-loading", "Thinking..." }
                },
                TutorPhase::Failed(message) => rsx! {
                    p { class: "tutor-error", "{message}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_ask.call(()),
                        "Retry"
                    }
                },
                TutorPhase::Ready(_) => rsx! {
                    div { class: "tutor-tabs",
                        for tab in TutorTab::ALL {
                            button {
                                class: if tab == selected { "tab active" } else { "tab" },
                                r#type: "button",
                                onclick: move |_| on_tab.call(tab),
                                "{tab.label()}"
                            }
                        }
                    }
                    p { class: "tutor-body", "{tutor.body().unwrap_or_default()}" }
                },
            }
        }
    }
}
