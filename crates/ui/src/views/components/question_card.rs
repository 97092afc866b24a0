use dioxus::prelude::*;
use ap_core::exam::ChoiceGesture;

use crate::vm::{ExamIntent, QuestionCardVm};

#[component]
pub fn QuestionCard(card: QuestionCardVm, on_intent: EventHandler<ExamIntent>) -> Element {
    let flag_label = if card.marked { "⚑ Marked" } else { "⚐ Mark for Review" };
    let eliminator_label = if card.eliminator_mode {
        "Eliminator: On"
    } else {
        "Eliminator: Off"
    };

    rsx! {
        article { class: "question-card",
            header { class: "question-header",
                span { class: "question-position", "{card.position_label}" }
                span { class: "{card.difficulty_class}", "{card.difficulty_label}" }
                span { class: "question-topic", "{card.topic}" }
                button {
                    class: if card.marked { "btn btn-flag marked" } else { "btn btn-flag" },
                    r#type: "button",
                    onclick: move |_| on_intent.call(ExamIntent::ToggleReview),
                    "{flag_label}"
                }
            }

            p { class: "question-text", "{card.text}" }

            if card.eliminator_offered {
                div { class: "eliminator-bar",
                    button {
                        class: if card.eliminator_mode { "btn btn-toggle on" } else { "btn btn-toggle" },
                        r#type: "button",
                        title: "Right-click a choice to cross it out",
                        onclick: move |_| on_intent.call(ExamIntent::ToggleEliminator),
                        "{eliminator_label}"
                    }
                    if card.has_eliminated && !card.checked {
                        button {
                            class: "btn btn-link",
                            r#type: "button",
                            onclick: move |_| on_intent.call(ExamIntent::ClearEliminated),
                            "Undo eliminations"
                        }
                    }
                }
            }

            ol { class: "choices",
                for choice in card.choices {
                    li { key: "{choice.index}",
                        button {
                            class: "{choice.class}",
                            r#type: "button",
                            onclick: move |_| on_intent.call(ExamIntent::Choice {
                                choice: choice.index,
                                gesture: ChoiceGesture::Click,
                            }),
                            oncontextmenu: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_intent.call(ExamIntent::Choice {
                                    choice: choice.index,
                                    gesture: ChoiceGesture::ContextMenu,
                                });
                            },
                            span { class: "choice-label", "{choice.label}" }
                            span { class: "choice-text", "{choice.text}" }
                        }
                    }
                }
            }

            div { class: "question-actions",
                if card.checked {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(ExamIntent::Reset),
                        "Try Again"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !card.can_check,
                        onclick: move |_| on_intent.call(ExamIntent::Check),
                        "Check Answer"
                    }
                }
            }

            if let Some(feedback) = card.feedback {
                div { class: if feedback.correct { "feedback correct" } else { "feedback incorrect" },
                    h3 { "{feedback.headline}" }
                    p { class: "feedback-answer", "{feedback.answer_label}" }
                    p { class: "feedback-explanation", "{feedback.explanation}" }
                }
            }
        }
    }
}
