use crate::SharedString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The values of the selected options, in the order the caller keeps them.
///
/// Uniqueness is not enforced.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Vec<SharedString>);

impl Selection {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the value has been selected.
    #[inline]
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|s| s.as_ref() == value)
    }

    /// Appends a value.
    #[inline]
    pub fn push(&mut self, value: impl Into<SharedString>) {
        self.0.push(value.into());
    }

    /// Removes all occurrences of a value.
    #[inline]
    pub fn remove(&mut self, value: &str) {
        self.0.retain(|s| s.as_ref() != value);
    }

    /// Removes the value if it has been selected, or appends it otherwise.
    pub fn toggle(&mut self, value: impl Into<SharedString>) {
        let value = value.into();
        if self.contains(&value) {
            self.remove(&value);
        } else {
            self.0.push(value);
        }
    }

    /// Returns the number of selected values.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the selected values.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_ref())
    }

    /// Parses a selection from a JSON array, keeping only the string entries.
    pub fn parse(value: &Value) -> Self {
        let Some(entries) = value.as_array() else {
            return Self::default();
        };
        let values = entries
            .iter()
            .filter_map(|entry| entry.as_str())
            .map(|s| SharedString::Owned(s.to_owned()))
            .collect::<Vec<_>>();
        if values.len() < entries.len() {
            tracing::warn!(
                "{} non-string values have been discarded from the selection",
                entries.len() - values.len()
            );
        }
        Self(values)
    }
}

impl From<Vec<SharedString>> for Selection {
    #[inline]
    fn from(values: Vec<SharedString>) -> Self {
        Self(values)
    }
}

impl From<Vec<String>> for Selection {
    #[inline]
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<Vec<&'static str>> for Selection {
    #[inline]
    fn from(values: Vec<&'static str>) -> Self {
        values.into_iter().collect()
    }
}

impl<const N: usize> From<[&'static str; N]> for Selection {
    #[inline]
    fn from(values: [&'static str; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<SharedString>> FromIterator<T> for Selection {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(|value| value.into()).collect())
    }
}
