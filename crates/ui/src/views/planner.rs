use ap_core::model::{PlannerTaskDraft, SubjectId, TaskId};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PlannerVm, TaskRowVm, map_planner};

#[derive(Clone, Debug, PartialEq)]
struct PlannerData {
    planner: PlannerVm,
    subject_options: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum FormState {
    Idle,
    Saving,
    Error(String),
}

#[component]
pub fn PlannerView() -> Element {
    let ctx = use_context::<AppContext>();
    let planner = ctx.planner();
    let catalog = ctx.catalog();

    let mut title = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut minutes = use_signal(|| "30".to_string());
    let form_state = use_signal(|| FormState::Idle);

    let planner_for_resource = planner.clone();
    let resource = use_resource(move || {
        let planner = planner_for_resource.clone();
        let catalog = catalog.clone();
        async move {
            let tasks = planner.today_tasks().await?;
            let progress = planner.progress().await?;
            let subjects = catalog.list_subjects().await?;
            let subject_options = subjects
                .iter()
                .map(|s| (s.id().to_string(), s.short_title().to_owned()))
                .collect();
            Ok::<_, ViewError>(PlannerData {
                planner: map_planner(planner.today(), &tasks, progress, &subjects),
                subject_options,
            })
        }
    });

    let toggle = {
        let planner = planner.clone();
        use_callback(move |task_id: String| {
            let planner = planner.clone();
            let mut resource = resource;
            spawn(async move {
                if planner.toggle_task(&TaskId::new(task_id)).await.is_ok() {
                    resource.restart();
                }
            });
        })
    };

    let add_task = use_callback(move |()| {
        let planner = planner.clone();
        let mut resource = resource;
        let mut form_state = form_state;
        let Ok(duration_minutes) = minutes().trim().parse::<u32>() else {
            form_state.set(FormState::Error("Duration must be a whole number of minutes.".into()));
            return;
        };
        let subject_id = subject();
        if subject_id.is_empty() {
            form_state.set(FormState::Error("Pick a subject.".into()));
            return;
        }
        let draft = PlannerTaskDraft {
            title: title(),
            subject_id: SubjectId::new(subject_id),
            unit_id: None,
            date: planner.today(),
            duration_minutes,
        };
        form_state.set(FormState::Saving);
        spawn(async move {
            match planner.add_task(draft).await {
                Ok(_) => {
                    title.set(String::new());
                    form_state.set(FormState::Idle);
                    resource.restart();
                }
                Err(err) => form_state.set(FormState::Error(err.to_string())),
            }
        });
    });

    let state = view_state_from_resource(&resource);
    let saving = form_state() == FormState::Saving;

    rsx! {
        div { class: "page planner-page",
            header { class: "view-header",
                h2 { class: "view-title", "Study Planner" }
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
                ViewState::Ready(data) => rsx! {
                    section { class: "planner-summary",
                        h3 { "{data.planner.heading}" }
                        p { "{data.planner.progress_label} · {data.planner.planned_label}" }
                        div { class: "progress",
                            div { class: "progress-bar", style: "{data.planner.progress_style}" }
                        }
                    }
                    if data.planner.tasks.is_empty() {
                        p { "Nothing planned for today." }
                    } else {
                        ul { class: "task-list",
                            for task in data.planner.tasks {
                                TaskRow { key: "{task.id}", task, on_toggle: move |id| toggle.call(id) }
                            }
                        }
                    }
                    form {
                        class: "task-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            add_task.call(());
                        },
                        input {
                            r#type: "text",
                            placeholder: "What will you study?",
                            value: "{title}",
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }
                        select {
                            value: "{subject}",
                            onchange: move |evt: FormEvent| subject.set(evt.value()),
                            option { value: "", "Subject" }
                            for (id, label) in data.subject_options {
                                option { key: "{id}", value: "{id}", "{label}" }
                            }
                        }
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{minutes}",
                            oninput: move |evt: FormEvent| minutes.set(evt.value()),
                        }
                        button { class: "btn btn-primary", r#type: "submit", disabled: saving, "Add Task" }
                    }
                    if let FormState::Error(message) = form_state() {
                        p { class: "view-error", "{message}" }
                    }
                },
            }
        }
    }
}

#[component]
fn TaskRow(task: TaskRowVm, on_toggle: EventHandler<String>) -> Element {
    let id = task.id.clone();
    rsx! {
        li { class: "{task.class}",
            label {
                input {
                    r#type: "checkbox",
                    checked: task.completed,
                    onchange: move |_| on_toggle.call(id.clone()),
                }
                span { class: "task-title", "{task.title}" }
            }
            span { class: "task-subject", "{task.subject_label}" }
            span { class: "task-duration", "{task.duration_label}" }
        }
    }
}
