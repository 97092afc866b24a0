use dioxus::prelude::*;

use crate::vm::DirectionsVm;

#[component]
pub fn DirectionsPanel(directions: DirectionsVm, on_close: EventHandler<()>) -> Element {
    rsx! {
        section { class: "directions", role: "dialog",
            header { class: "directions-header",
                h3 { "Directions" }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            p { class: "directions-title", "{directions.title}" }
            for item in directions.items {
                p { key: "{item.heading}",
                    strong { "{item.heading}: " }
                    "{item.body}"
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_close.call(()),
                "Got it"
            }
        }
    }
}
