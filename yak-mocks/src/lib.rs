//! yak mocks - Web harness for the chat UI components
//!
//! A minimal web app that renders the components with fixture data.
//! Used for visual review and screenshot generation.

pub mod demo_data;
pub mod pages;
pub mod ui;

use dioxus::prelude::*;
use pages::{Chat, MockIndex};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/chat")]
    Chat {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: "/assets/main.css" }
        document::Link { rel: "stylesheet", href: "/assets/tailwind.css" }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
