//! Fixture data for the demo pages

use yak_ui::MessageRole;

/// A transcript entry rendered by the chat mock.
#[derive(Clone, PartialEq)]
pub struct DemoMessage {
    pub id: &'static str,
    pub role: MessageRole,
    pub body: &'static str,
}

/// A short fixture conversation exercising both roles.
pub fn transcript() -> Vec<DemoMessage> {
    vec![
        DemoMessage {
            id: "msg-1",
            role: MessageRole::User,
            body: "How do yaks handle cold weather?",
        },
        DemoMessage {
            id: "msg-2",
            role: MessageRole::Assistant,
            body: "Remarkably well. A yak's double coat pairs a woolly underlayer with \
                   long guard hairs, and they stay comfortable well below -30°C.",
        },
        DemoMessage {
            id: "msg-3",
            role: MessageRole::User,
            body: "Could one live somewhere warm?",
        },
        DemoMessage {
            id: "msg-4",
            role: MessageRole::Assistant,
            body: "Not happily. Above roughly 15°C they overheat quickly, which is why \
                   domestic herds stay at high altitude.",
        },
    ]
}
