//! Ghost icon button component

use dioxus::prelude::*;

/// A minimal button for icon-only actions.
///
/// Chromeless at rest; a neutral fill appears on hover (light scheme
/// `gray-100`, dark scheme `gray-700`) and a blue ring on keyboard focus,
/// replacing the suppressed browser outline. `label` is exposed as both the
/// hover tooltip and the accessible name, so screen readers announce the
/// action even though the visible body is a wordless icon.
///
/// The button owns no behavior. `onclick` is forwarded to the underlying
/// element untouched and may be omitted entirely.
#[component]
pub fn IconButton(
    /// Tooltip and accessible name.
    label: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    /// Icon content, rendered as the button body unmodified. May be empty.
    #[props(default = VNode::empty())]
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "p-1.5 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700 focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-500 transition-colors",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |e| {
                if let Some(ref handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}
