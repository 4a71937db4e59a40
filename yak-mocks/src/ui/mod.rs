//! Shared UI components for yak-mocks

mod link_card;

pub use link_card::LinkCard;
