//! Transient UI state owned by components.

mod binary;
mod hook;
mod interaction;

pub use binary::{BinaryState, Transition};
pub use hook::{use_binary_state, BinaryStateHandle};
pub use interaction::Interaction;
