//! Chat transcript mock page

use dioxus::prelude::*;
use tracing::debug;
use yak_ui::{IconButton, MessageActions, MessageRole, SendIcon};

use crate::demo_data::{self, DemoMessage};

#[component]
pub fn Chat() -> Element {
    let mut dark = use_signal(|| true);

    rsx! {
        div { class: if dark() { "dark" } else { "" },
            div { class: "min-h-screen bg-white text-gray-900 dark:bg-gray-900 dark:text-gray-100",
                div { class: "max-w-2xl mx-auto p-8",
                    div { class: "flex items-center justify-between mb-8",
                        h1 { class: "text-xl font-bold", "Chat" }
                        SchemeToggle {
                            dark: dark(),
                            on_select: move |value| dark.set(value),
                        }
                    }

                    for message in demo_data::transcript() {
                        MessageBubble { message }
                    }

                    div { class: "flex items-center gap-2 mt-6 px-3 py-2 border rounded-xl border-gray-300 dark:border-gray-700",
                        span { class: "flex-1 text-gray-400", "Fixture composer" }
                        IconButton {
                            label: "Send message".to_string(),
                            onclick: move |_| debug!("send clicked"),
                            SendIcon {}
                        }
                    }
                }
            }
        }
    }
}

/// Segmented light/dark switch driving the `dark` class on the page root.
#[component]
fn SchemeToggle(dark: bool, on_select: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "inline-flex items-center p-0.5 rounded-full border border-gray-300 dark:border-gray-700",
            button {
                class: if !dark {
                    "px-3 py-1 text-xs rounded-full bg-blue-600 text-white"
                } else {
                    "px-3 py-1 text-xs rounded-full text-gray-400"
                },
                onclick: move |_| on_select.call(false),
                "Light"
            }
            button {
                class: if dark {
                    "px-3 py-1 text-xs rounded-full bg-blue-600 text-white"
                } else {
                    "px-3 py-1 text-xs rounded-full text-gray-400"
                },
                onclick: move |_| on_select.call(true),
                "Dark"
            }
        }
    }
}

#[component]
fn MessageBubble(message: DemoMessage) -> Element {
    let id = message.id;
    let role = message.role;

    let align = match role {
        MessageRole::User => "items-end",
        MessageRole::Assistant => "items-start",
    };
    let bubble = match role {
        MessageRole::User => "bg-blue-600 text-white rounded-2xl px-4 py-2 max-w-md",
        MessageRole::Assistant => "bg-gray-100 dark:bg-gray-800 rounded-2xl px-4 py-2 max-w-md",
    };

    let actions = match role {
        MessageRole::User => rsx! {
            MessageActions {
                role,
                on_copy: move |_| debug!("copy {id}"),
                on_edit: move |_| debug!("edit {id}"),
            }
        },
        MessageRole::Assistant => rsx! {
            MessageActions {
                role,
                on_copy: move |_| debug!("copy {id}"),
                on_regenerate: move |_| debug!("regenerate {id}"),
                on_good_response: move |_| debug!("good response on {id}"),
                on_bad_response: move |_| debug!("bad response on {id}"),
            }
        },
    };

    rsx! {
        div { class: "flex flex-col {align} mb-4",
            div { class: "{bubble}", "{message.body}" }
            div { class: "mt-1", {actions} }
        }
    }
}
