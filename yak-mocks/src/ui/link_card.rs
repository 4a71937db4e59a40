//! Navigation card for the mock index

use crate::Route;
use dioxus::prelude::*;

/// Bordered card linking to a demo page, with a trailing arrow glyph.
#[component]
pub fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "flex items-center justify-between px-4 py-3 rounded-xl border border-gray-800 hover:border-gray-600 transition-colors",
            div {
                div { class: "font-medium text-gray-100", "{title}" }
                p { class: "text-sm text-gray-500 mt-1", "{description}" }
            }
            span { class: "text-gray-500", "\u{2192}" }
        }
    }
}
