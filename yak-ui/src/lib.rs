//! yak-ui - Shared UI components for yak
//!
//! Pure view components for the chat interface. No stores, no I/O: callers
//! supply all behavior through `EventHandler` props.

pub mod components;

pub use components::*;
