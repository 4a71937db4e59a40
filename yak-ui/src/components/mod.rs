//! Shared UI components

pub mod icon_button;
pub mod icons;
pub mod message_actions;

pub use icon_button::IconButton;
pub use icons::{
    CheckIcon, CopyIcon, EllipsisIcon, PencilIcon, RefreshIcon, SendIcon, ThumbsDownIcon,
    ThumbsUpIcon, TrashIcon, XIcon,
};
pub use message_actions::{MessageActions, MessageRole};
