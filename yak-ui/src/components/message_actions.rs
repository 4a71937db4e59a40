//! Per-message action toolbar for the chat transcript

use dioxus::prelude::*;

use super::icon_button::IconButton;
use super::icons::{CheckIcon, CopyIcon, PencilIcon, RefreshIcon, ThumbsDownIcon, ThumbsUpIcon};

/// How long the check glyph replaces the copy icon after a copy.
const COPY_FEEDBACK_MS: u64 = 1500;

/// Which side of the conversation a message belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageRole {
    User,
    Assistant,
}

/// Row of icon buttons shown under a chat message.
///
/// The action set depends on `role`: user messages get copy/edit, assistant
/// messages get copy/feedback/regenerate. Optional actions render no button
/// unless the caller supplies a handler. Copy shows transient feedback by
/// swapping its icon for a check.
#[component]
pub fn MessageActions(
    role: MessageRole,
    on_copy: EventHandler<()>,
    #[props(default)] on_edit: Option<EventHandler<()>>,
    #[props(default)] on_regenerate: Option<EventHandler<()>>,
    #[props(default)] on_good_response: Option<EventHandler<()>>,
    #[props(default)] on_bad_response: Option<EventHandler<()>>,
) -> Element {
    let mut copied = use_signal(|| false);
    let mut feedback_task = use_signal(|| None::<Task>);

    let edit = matches!(role, MessageRole::User)
        .then_some(on_edit)
        .flatten();
    let is_assistant = matches!(role, MessageRole::Assistant);
    let good = is_assistant.then_some(on_good_response).flatten();
    let bad = is_assistant.then_some(on_bad_response).flatten();
    let regenerate = is_assistant.then_some(on_regenerate).flatten();

    rsx! {
        div { class: "flex items-center gap-1",
            IconButton {
                label: if copied() { "Copied".to_string() } else { "Copy".to_string() },
                onclick: move |_| {
                    on_copy.call(());
                    if let Some(task) = feedback_task.take() {
                        task.cancel();
                    }
                    copied.set(true);
                    let task = spawn(async move {
                        sleep_ms(COPY_FEEDBACK_MS).await;
                        copied.set(false);
                    });
                    feedback_task.set(Some(task));
                },
                if copied() {
                    CheckIcon {}
                } else {
                    CopyIcon {}
                }
            }
            {edit.map(|handler| rsx! {
                IconButton {
                    label: "Edit".to_string(),
                    onclick: move |_| handler.call(()),
                    PencilIcon {}
                }
            })}
            {good.map(|handler| rsx! {
                IconButton {
                    label: "Good response".to_string(),
                    onclick: move |_| handler.call(()),
                    ThumbsUpIcon {}
                }
            })}
            {bad.map(|handler| rsx! {
                IconButton {
                    label: "Bad response".to_string(),
                    onclick: move |_| handler.call(()),
                    ThumbsDownIcon {}
                }
            })}
            {regenerate.map(|handler| rsx! {
                IconButton {
                    label: "Regenerate".to_string(),
                    onclick: move |_| handler.call(()),
                    RefreshIcon {}
                }
            })}
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
