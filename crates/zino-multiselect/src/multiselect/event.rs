use super::Dataset;
use crate::{form::PressEvent, state::Transition, SharedString};
use std::fmt;

/// The kind of a [`MenuEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEventKind {
    /// The menu has been opened.
    Open,
    /// The menu has been closed.
    Close,
}

impl MenuEventKind {
    /// Returns the event type as `str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuEventKind::Open => "open",
            MenuEventKind::Close => "close",
        }
    }
}

impl From<Transition> for MenuEventKind {
    #[inline]
    fn from(transition: Transition) -> Self {
        match transition {
            Transition::Opened => MenuEventKind::Open,
            Transition::Closed => MenuEventKind::Close,
        }
    }
}

impl fmt::Display for MenuEventKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event emitted when the menu has been opened or closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEvent {
    /// The event kind.
    pub kind: MenuEventKind,
    /// The dataset of the component.
    pub dataset: Dataset,
}

impl MenuEvent {
    /// Creates a new instance for the transition.
    #[inline]
    pub fn new(transition: Transition, dataset: Dataset) -> Self {
        Self {
            kind: transition.into(),
            dataset,
        }
    }
}

/// An event emitted when an option has been activated.
#[derive(Clone)]
pub struct SelectEvent {
    /// The value of the activated option.
    pub value: SharedString,
    /// The dataset of the component.
    pub dataset: Dataset,
    /// The interaction event that activated the option.
    pub source: Option<PressEvent>,
}

impl SelectEvent {
    /// Creates a new instance.
    #[inline]
    pub fn new(value: impl Into<SharedString>, dataset: Dataset) -> Self {
        Self {
            value: value.into(),
            dataset,
            source: None,
        }
    }

    /// Sets the interaction event that activated the option.
    #[inline]
    #[must_use]
    pub fn with_source(mut self, source: PressEvent) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns the event type as `str`.
    #[inline]
    pub fn event_type(&self) -> &'static str {
        "select"
    }
}

impl fmt::Debug for SelectEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SelectEvent")
            .field("value", &self.value)
            .field("dataset", &self.dataset)
            .field("source", &self.source)
            .finish()
    }
}

/// A press on a menu row, reported by [`MultiselectMenu`](super::MultiselectMenu).
#[derive(Debug, Clone)]
pub struct OptionPress {
    /// The value of the pressed option.
    pub value: SharedString,
    /// The interaction event.
    pub source: PressEvent,
}

impl OptionPress {
    /// Converts `self` into a [`SelectEvent`] with the dataset.
    #[inline]
    pub fn into_select_event(self, dataset: Dataset) -> SelectEvent {
        SelectEvent::new(self.value, dataset).with_source(self.source)
    }
}
