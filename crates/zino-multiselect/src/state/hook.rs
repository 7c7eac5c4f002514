use super::{BinaryState, Transition};
use dioxus::prelude::*;

/// Creates a [`BinaryState`] owned by the current component.
///
/// The `on_transition` callback is invoked once for every change of the state,
/// after the new state has been written to the signal.
pub fn use_binary_state(initial: bool, on_transition: Callback<Transition>) -> BinaryStateHandle {
    let state = use_signal(|| BinaryState::new(initial));
    BinaryStateHandle {
        state,
        on_transition,
    }
}

/// A copyable handle to a [`BinaryState`] stored in a signal.
#[derive(Clone, Copy, PartialEq)]
pub struct BinaryStateHandle {
    /// The underlying state.
    state: Signal<BinaryState>,
    /// A callback to be invoked after each transition.
    on_transition: Callback<Transition>,
}

impl BinaryStateHandle {
    /// Opens the popup.
    #[inline]
    pub fn open(&mut self) {
        self.apply(BinaryState::open);
    }

    /// Closes the popup.
    #[inline]
    pub fn close(&mut self) {
        self.apply(BinaryState::close);
    }

    /// Flips the state.
    #[inline]
    pub fn toggle(&mut self) {
        self.apply(BinaryState::toggle);
    }

    /// Returns `true` if the popup is open, subscribing the current scope to the state.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    fn apply(&mut self, change: fn(&mut BinaryState) -> Option<Transition>) {
        let transition = change(&mut *self.state.write());
        if let Some(transition) = transition {
            tracing::debug!("popup state {transition}");
            self.on_transition.call(transition);
        }
    }
}
