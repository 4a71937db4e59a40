use dioxus::prelude::*;
use yak_mocks::pages::Chat;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn transcript_renders_messages_with_action_toolbars() {
    let html = render(Chat);
    assert!(html.contains("How do yaks handle cold weather?"), "html: {html}");
    // User messages expose copy/edit, assistant messages feedback/regenerate.
    assert!(html.contains(r#"aria-label="Copy""#), "html: {html}");
    assert!(html.contains(r#"aria-label="Edit""#), "html: {html}");
    assert!(html.contains(r#"aria-label="Regenerate""#), "html: {html}");
    assert!(html.contains(r#"aria-label="Send message""#), "html: {html}");
}

#[test]
fn scheme_toggle_starts_dark_with_both_options() {
    let html = render(Chat);
    assert!(html.contains(r#"class="dark""#), "html: {html}");
    assert!(html.contains(">Light<"), "html: {html}");
    assert!(html.contains(">Dark<"), "html: {html}");
}
