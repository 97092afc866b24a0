use ap_core::model::SubjectId;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ChatRowVm, ChatVm, QUICK_PROMPTS, map_subject_options};

/// Free-form tutor conversation.
#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let chat = ctx.chat();

    let mut vm = use_signal(ChatVm::new);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move { Ok::<_, ViewError>(catalog.list_subjects().await?) }
    });

    let send = {
        let chat = chat.clone();
        use_callback(move |()| {
            let mut vm = vm;
            let Some(request) = vm.write().begin(chat.now()) else {
                return;
            };
            let chat = chat.clone();
            spawn(async move {
                let outcome = chat.send(request).await;
                vm.write().finish(outcome);
            });
        })
    };

    let clear = use_callback(move |()| {
        let mut vm = vm;
        if vm.write().clear() {
            chat.cancel();
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Enter && !evt.data.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            send.call(());
        }
    });

    let (subjects, load_error) = match view_state_from_resource(&resource) {
        ViewState::Ready(subjects) => (subjects, None),
        ViewState::Error(err) => (Vec::new(), Some(err)),
        ViewState::Idle | ViewState::Loading => (Vec::new(), None),
    };
    let options = map_subject_options(&subjects);
    let chat_state = vm();
    let rows = chat_state.rows();
    let selected = chat_state
        .subject_id()
        .map(|id| id.to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "page chat-page",
            header { class: "view-header chat-header",
                div {
                    h2 { class: "view-title", "AI Tutor" }
                    p { class: "view-subtitle",
                        "Get instant help with any AP concept. Ask questions, get explanations, and practice problems."
                    }
                }
                if let Some(err) = load_error {
                    p { class: "view-error", "{err.message()}" }
                }
                select {
                    class: "chat-subject",
                    value: "{selected}",
                    onchange: move |evt: FormEvent| {
                        let id = SubjectId::new(evt.value());
                        let subject = subjects.iter().find(|s| s.id() == &id);
                        vm.write().select_subject(subject);
                    },
                    option { value: "", "Select subject" }
                    for option_vm in options {
                        option {
                            key: "{option_vm.id}",
                            value: "{option_vm.id}",
                            selected: option_vm.id == selected,
                            "{option_vm.label}"
                        }
                    }
                }
            }
            section { class: "chat-window",
                div { class: "chat-messages",
                    if rows.is_empty() {
                        div { class: "chat-empty",
                            h3 { "How can I help you today?" }
                            p {
                                "Ask me anything about your AP subjects. I can explain concepts, solve problems, and help you prepare for your exams."
                            }
                            div { class: "quick-prompts",
                                for prompt in QUICK_PROMPTS {
                                    button {
                                        key: "{prompt}",
                                        class: "quick-prompt",
                                        r#type: "button",
                                        onclick: move |_| vm.write().use_prompt(prompt),
                                        "{prompt}"
                                    }
                                }
                            }
                        }
                    } else {
                        for (index, row) in rows.into_iter().enumerate() {
                            ChatRow { key: "{index}", row }
                        }
                    }
                    if chat_state.is_pending() {
                        div { class: "message assistant pending",
                            span { class: "message-author", "AI Tutor" }
                            p { "Thinking..." }
                        }
                    }
                    if let Some(error) = chat_state.error() {
                        p { class: "view-error", "{error}" }
                    }
                }
                div { class: "chat-input",
                    textarea {
                        rows: "2",
                        placeholder: "Ask me anything about your AP subjects...",
                        value: "{chat_state.draft()}",
                        oninput: move |evt: FormEvent| vm.write().set_draft(evt.value()),
                        onkeydown: on_key,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !chat_state.can_send(),
                        onclick: move |_| send.call(()),
                        "Send"
                    }
                    if !chat_state.is_empty() {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| clear.call(()),
                            "New Chat"
                        }
                    }
                }
                p { class: "chat-disclaimer",
                    "AI responses are generated and may not always be accurate. Always verify important information."
                }
            }
        }
    }
}

#[component]
fn ChatRow(row: ChatRowVm) -> Element {
    rsx! {
        div { class: "{row.class}",
            span { class: "message-author", "{row.author}" }
            p { class: "message-body", "{row.content}" }
            span { class: "message-time", "{row.time_label}" }
        }
    }
}
