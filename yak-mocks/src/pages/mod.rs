//! Demo pages

mod chat;
mod mock_index;

pub use chat::Chat;
pub use mock_index::MockIndex;
