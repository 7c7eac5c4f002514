//! CSS classes for components.

use crate::SharedString;
use dioxus_core::{prelude::*, AttributeValue};
use smallvec::SmallVec;
use std::{borrow::Cow, fmt};

/// A class list for dioxus components.
///
/// Classes are deduplicated on insertion, and the list keeps insertion order
/// when it is formatted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Class {
    /// A list of classes.
    classes: SmallVec<[SharedString; 4]>,
}

impl Class {
    /// Creates a new instance from a whitespace-separated list of classes.
    #[inline]
    pub fn new(class: impl Into<SharedString>) -> Self {
        let mut list = Self::default();
        list.add(class);
        list
    }

    /// Adds classes to the list, omitting any that are already present.
    pub fn add(&mut self, class: impl Into<SharedString>) {
        match class.into() {
            Cow::Borrowed(class) => {
                for name in class.split_whitespace() {
                    self.push(Cow::Borrowed(name));
                }
            }
            Cow::Owned(class) => {
                for name in class.split_whitespace() {
                    self.push(Cow::Owned(name.to_owned()));
                }
            }
        }
    }

    /// Adds classes to the list if the condition holds.
    #[inline]
    pub fn add_if(&mut self, class: impl Into<SharedString>, condition: bool) {
        if condition {
            self.add(class);
        }
    }

    /// Returns `self` with the classes added if the condition holds.
    #[inline]
    #[must_use]
    pub fn with(mut self, class: impl Into<SharedString>, condition: bool) -> Self {
        self.add_if(class, condition);
        self
    }

    /// Appends all classes of another list.
    pub fn extend(&mut self, other: &Class) {
        for class in other.classes.iter() {
            self.push(class.clone());
        }
    }

    /// Removes a class from the list.
    #[inline]
    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|s| s.as_ref() != class)
    }

    /// Toggles a class in the list.
    pub fn toggle(&mut self, class: impl Into<SharedString>) {
        let class = class.into();
        if let Some(index) = self.classes.iter().position(|s| s == &class) {
            self.classes.remove(index);
        } else {
            self.push(class);
        }
    }

    /// Returns `true` if a given class has been added.
    #[inline]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|s| s.as_ref() == class)
    }

    /// Returns `true` if the class list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Formats `self` as a `Cow<str>`.
    pub fn format(&self) -> Cow<'_, str> {
        match self.classes.as_slice() {
            [] => Cow::Borrowed(""),
            [class] => Cow::Borrowed(class.as_ref()),
            classes => Cow::Owned(classes.join(" ")),
        }
    }

    fn push(&mut self, class: SharedString) {
        if !(class.is_empty() || self.contains(&class)) {
            self.classes.push(class);
        }
    }
}

impl From<&'static str> for Class {
    #[inline]
    fn from(class: &'static str) -> Self {
        Self::new(class)
    }
}

impl From<String> for Class {
    #[inline]
    fn from(class: String) -> Self {
        Self::new(class)
    }
}

impl From<SharedString> for Class {
    #[inline]
    fn from(class: SharedString) -> Self {
        Self::new(class)
    }
}

impl From<Vec<&'static str>> for Class {
    fn from(classes: Vec<&'static str>) -> Self {
        let mut list = Self::default();
        for class in classes {
            list.add(class);
        }
        list
    }
}

impl<const N: usize> From<[&'static str; N]> for Class {
    fn from(classes: [&'static str; N]) -> Self {
        let mut list = Self::default();
        for class in classes {
            list.add(class);
        }
        list
    }
}

impl fmt::Display for Class {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl IntoAttributeValue for Class {
    #[inline]
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.format().into_owned())
    }
}
