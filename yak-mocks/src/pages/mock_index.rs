//! Mock pages index

use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;
use yak_ui::{CopyIcon, EllipsisIcon, IconButton, PencilIcon, RefreshIcon, TrashIcon, XIcon};

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "dark min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "yak mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Pages" }
            div { class: "space-y-2 mb-8",
                LinkCard {
                    to: Route::Chat {},
                    title: "Chat",
                    description: "Transcript with message action toolbars and a scheme toggle",
                }
            }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Icon Button" }
            div { class: "flex flex-wrap gap-2",
                IconButton { label: "Copy".to_string(), CopyIcon {} }
                IconButton { label: "Edit".to_string(), PencilIcon {} }
                IconButton { label: "Regenerate".to_string(), RefreshIcon {} }
                IconButton { label: "Delete".to_string(), TrashIcon {} }
                IconButton { label: "More".to_string(), EllipsisIcon {} }
                IconButton { label: "Close".to_string(), XIcon {} }
            }
        }
    }
}
