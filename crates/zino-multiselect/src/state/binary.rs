use std::fmt;

/// A two-state flag for a popup that can be shown or hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryState {
    /// A flag to indicate whether the popup is open or not.
    open: bool,
}

impl BinaryState {
    /// Creates a new instance with the initial state.
    #[inline]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Opens the popup.
    #[inline]
    pub fn open(&mut self) -> Option<Transition> {
        self.set(true)
    }

    /// Closes the popup.
    #[inline]
    pub fn close(&mut self) -> Option<Transition> {
        self.set(false)
    }

    /// Flips the state.
    #[inline]
    pub fn toggle(&mut self) -> Option<Transition> {
        self.set(!self.open)
    }

    /// Sets the state and returns the transition if it has been changed.
    pub fn set(&mut self, open: bool) -> Option<Transition> {
        if self.open == open {
            return None;
        }
        self.open = open;
        Some(if open {
            Transition::Opened
        } else {
            Transition::Closed
        })
    }

    /// Returns `true` if the popup is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// A settled change of a [`BinaryState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The state has changed from closed to open.
    Opened,
    /// The state has changed from open to closed.
    Closed,
}

impl Transition {
    /// Returns `true` if the new state is open.
    #[inline]
    pub fn is_open(self) -> bool {
        self == Transition::Opened
    }

    /// Returns the transition as `str`.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Transition::Opened => "opened",
            Transition::Closed => "closed",
        }
    }
}

impl fmt::Display for Transition {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryState, Transition};

    #[test]
    fn it_starts_closed() {
        let state = BinaryState::default();
        assert!(!state.is_open());
    }

    #[test]
    fn it_reports_settled_transitions_in_order() {
        let mut state = BinaryState::default();
        let mut transitions = Vec::new();
        transitions.extend(state.open());
        transitions.extend(state.close());
        assert_eq!(transitions, [Transition::Opened, Transition::Closed]);
        assert!(!state.is_open());
    }

    #[test]
    fn it_ignores_redundant_changes() {
        let mut state = BinaryState::new(true);
        assert_eq!(state.open(), None);
        assert_eq!(state.toggle(), Some(Transition::Closed));
        assert_eq!(state.close(), None);
        assert_eq!(state.toggle(), Some(Transition::Opened));
        assert!(state.is_open());
    }
}
