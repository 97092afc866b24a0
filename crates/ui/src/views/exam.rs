use std::sync::Arc;

use ap_core::model::UnitId;
use dioxus::prelude::*;
use dioxus_router::Link;
use services::DifficultyFilter;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::{DirectionsPanel, QuestionCard, QuestionNavigator, TutorPanel};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    ExamIntent, ExamVm, NavigatorVm, PracticeMode, QuestionCardVm, TutorVm, map_directions,
};

#[derive(Clone, Debug, PartialEq)]
struct ExamHeader {
    subject_id: String,
    subject_title: String,
    subject_full_title: String,
    unit_title: String,
}

struct ExamFrame {
    card: QuestionCardVm,
    nav: NavigatorVm,
    notice: Option<String>,
    can_previous: bool,
    can_next: bool,
}

fn frame(exam: &ExamVm) -> ExamFrame {
    ExamFrame {
        card: exam.card(),
        nav: exam.navigator(),
        notice: exam.notice().map(str::to_owned),
        can_previous: exam.can_go_previous(),
        can_next: exam.can_go_next(),
    }
}

/// Bluebook-style exam simulation.
#[component]
pub fn ExamView(unit_id: String) -> Element {
    rsx! {
        ExamScreen { unit_id, mode: PracticeMode::Bluebook }
    }
}

#[component]
fn DifficultySelect(value: DifficultyFilter, on_change: EventHandler<DifficultyFilter>) -> Element {
    rsx! {
        label { class: "difficulty-select",
            "Difficulty "
            select {
                value: "{value.as_str()}",
                onchange: move |evt: FormEvent| {
                    if let Ok(filter) = evt.value().parse::<DifficultyFilter>() {
                        on_change.call(filter);
                    }
                },
                for choice in DifficultyFilter::OPTIONS {
                    option {
                        value: "{choice.as_str()}",
                        selected: choice == value,
                        "{choice.label()}"
                    }
                }
            }
        }
    }
}

/// Shared question screen behind both practice routes.
#[component]
pub(crate) fn ExamScreen(unit_id: String, mode: PracticeMode) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let practice = ctx.practice();
    let tutor = ctx.tutor();

    let mut filter = use_signal(DifficultyFilter::default);
    let vm = use_signal(|| None::<ExamVm>);
    let mut tutor_vm = use_signal(TutorVm::new);
    // Exam mode opens on the section directions.
    let mut show_directions = use_signal(|| mode == PracticeMode::Bluebook);

    let practice_for_resource = Arc::clone(&practice);
    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let practice = practice_for_resource.clone();
        let unit_id = UnitId::new(unit_id.clone());
        let filter = filter();
        let mut vm = vm;
        let mut tutor_vm = tutor_vm;
        async move {
            let Some((subject, unit)) = catalog.locate_unit(&unit_id).await? else {
                return Err(ViewError::NotFound);
            };
            let header = ExamHeader {
                subject_id: subject.id().to_string(),
                subject_title: subject.short_title().to_owned(),
                subject_full_title: subject.title().to_owned(),
                unit_title: unit.title().to_owned(),
            };

            vm.set(None);
            tutor_vm.set(TutorVm::new());
            let session = practice.start_session(&unit_id, filter).await?;
            vm.set(Some(ExamVm::new(session, mode)));
            Ok::<_, ViewError>(header)
        }
    });

    let dispatch = {
        let practice = Arc::clone(&practice);
        let tutor = Arc::clone(&tutor);
        use_callback(move |intent: ExamIntent| {
            let mut vm = vm;
            let mut tutor_vm = tutor_vm;
            let question_id = {
                let mut guard = vm.write();
                let Some(exam) = guard.as_mut() else {
                    return;
                };
                exam.apply(&practice, intent);
                exam.current_question().id().clone()
            };
            if tutor_vm.write().follow_question(&question_id) {
                tutor.cancel();
            }
        })
    };

    let shuffle = {
        let practice = Arc::clone(&practice);
        let tutor = Arc::clone(&tutor);
        use_callback(move |()| {
            let mut vm = vm;
            let mut tutor_vm = tutor_vm;
            let question_id = {
                let mut guard = vm.write();
                let Some(exam) = guard.as_mut() else {
                    return;
                };
                exam.shuffle(&practice);
                exam.current_question().id().clone()
            };
            if tutor_vm.write().follow_question(&question_id) {
                tutor.cancel();
            }
        })
    };

    // The request future never touches `vm`, so navigation stays live while it runs.
    let ask_help = {
        let tutor = Arc::clone(&tutor);
        use_callback(move |()| {
            let mut tutor_vm = tutor_vm;
            let Some(question) = vm.read().as_ref().map(|exam| exam.current_question().clone())
            else {
                return;
            };
            let request = tutor_vm.write().begin(&question);
            let tutor = Arc::clone(&tutor);
            spawn(async move {
                let outcome = tutor.ask(request).await;
                tutor_vm.write().finish(question.id(), outcome);
            });
        })
    };

    let close_help = {
        let tutor = Arc::clone(&tutor);
        use_callback(move |()| {
            let mut tutor_vm = tutor_vm;
            tutor_vm.write().close();
            tutor.cancel();
        })
    };

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let intent = match evt.data.key() {
            Key::ArrowRight => ExamIntent::Next,
            Key::ArrowLeft => ExamIntent::Previous,
            _ => return,
        };
        evt.prevent_default();
        dispatch.call(intent);
    });

    let state = view_state_from_resource(&resource);
    let current_filter = filter();
    let exam_frame = vm.read().as_ref().map(frame);

    rsx! {
        div { class: "page exam-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    if err == ViewError::EmptySession {
                        DifficultySelect {
                            value: current_filter,
                            on_change: move |value| filter.set(value),
                        }
                    }
                    p { class: "view-error", "{err.message()}" }
                    Link { class: "btn btn-secondary", to: Route::Subjects {}, "Back to Subjects" }
                },
                ViewState::Ready(header) => rsx! {
                    header { class: "view-header",
                        Link {
                            class: "back-link",
                            to: Route::SubjectDetail { subject_id: header.subject_id.clone() },
                            "← {header.subject_title}"
                        }
                        h2 { class: "view-title", "{header.unit_title}" }
                        p { class: "view-subtitle", "{mode.title()}" }
                    }
                    div { class: "exam-toolbar",
                        DifficultySelect {
                            value: current_filter,
                            on_change: move |value| filter.set(value),
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| shuffle.call(()),
                            "Shuffle"
                        }
                        if mode == PracticeMode::Bluebook {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| show_directions.set(!show_directions()),
                                "Directions"
                            }
                        }
                    }
                    if mode == PracticeMode::Bluebook && show_directions() {
                        DirectionsPanel {
                            directions: map_directions(&header.subject_full_title),
                            on_close: move |()| show_directions.set(false),
                        }
                    }
                    if let Some(exam_frame) = exam_frame {
                        div { class: "exam-layout",
                            div { class: "exam-main", tabindex: "0", onkeydown: on_key,
                                if let Some(notice) = exam_frame.notice {
                                    p { class: "notice", "{notice}" }
                                }
                                QuestionCard {
                                    card: exam_frame.card,
                                    on_intent: move |intent| dispatch.call(intent),
                                }
                                div { class: "exam-nav",
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        disabled: !exam_frame.can_previous,
                                        onclick: move |_| dispatch.call(ExamIntent::Previous),
                                        "← Previous"
                                    }
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        disabled: !exam_frame.can_next,
                                        onclick: move |_| dispatch.call(ExamIntent::Next),
                                        "Next →"
                                    }
                                }
                            }
                            div { class: "exam-side",
                                if mode == PracticeMode::Bluebook {
                                    QuestionNavigator {
                                        nav: exam_frame.nav,
                                        on_jump: move |index| dispatch.call(ExamIntent::GoTo(index)),
                                    }
                                }
                                TutorPanel {
                                    tutor: tutor_vm(),
                                    on_ask: move |()| ask_help.call(()),
                                    on_close: move |()| close_help.call(()),
                                    on_tab: move |tab| tutor_vm.write().select_tab(tab),
                                    on_attempt: move |text| tutor_vm.write().set_attempt(text),
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
