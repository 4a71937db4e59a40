use dioxus::prelude::*;
use yak_ui::{MessageActions, MessageRole};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn button_count(html: &str) -> usize {
    html.matches("<button").count()
}

#[test]
fn user_messages_get_copy_and_edit() {
    fn app() -> Element {
        rsx! {
            MessageActions {
                role: MessageRole::User,
                on_copy: move |_| {},
                on_edit: move |_| {},
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-label="Copy""#), "html: {html}");
    assert!(html.contains(r#"aria-label="Edit""#), "html: {html}");
    assert!(!html.contains("Regenerate"), "html: {html}");
    assert_eq!(button_count(&html), 2);
}

#[test]
fn assistant_messages_get_feedback_and_regenerate() {
    fn app() -> Element {
        rsx! {
            MessageActions {
                role: MessageRole::Assistant,
                on_copy: move |_| {},
                on_regenerate: move |_| {},
                on_good_response: move |_| {},
                on_bad_response: move |_| {},
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-label="Copy""#), "html: {html}");
    assert!(html.contains(r#"aria-label="Good response""#), "html: {html}");
    assert!(html.contains(r#"aria-label="Bad response""#), "html: {html}");
    assert!(html.contains(r#"aria-label="Regenerate""#), "html: {html}");
    assert!(!html.contains("Edit"), "html: {html}");
    assert_eq!(button_count(&html), 4);
}

#[test]
fn edit_handler_is_ignored_for_assistant_messages() {
    fn app() -> Element {
        rsx! {
            MessageActions {
                role: MessageRole::Assistant,
                on_copy: move |_| {},
                on_edit: move |_| {},
            }
        }
    }
    let html = render(app);
    assert!(!html.contains("Edit"), "html: {html}");
    assert_eq!(button_count(&html), 1);
}

#[test]
fn optional_actions_without_handlers_render_no_buttons() {
    fn app() -> Element {
        rsx! {
            MessageActions { role: MessageRole::User, on_copy: move |_| {} }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-label="Copy""#), "html: {html}");
    assert_eq!(button_count(&html), 1);
}
