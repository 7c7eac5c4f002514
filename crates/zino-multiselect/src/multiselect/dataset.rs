use crate::SharedString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, rc::Rc};

/// Opaque string pairs which are attached to every emitted event.
///
/// The component never reads them. They let the caller correlate events with the
/// control that emitted them. Cloning is cheap.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Rc<BTreeMap<SharedString, SharedString>>);

impl Dataset {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key-value pair.
    #[inline]
    pub fn insert(&mut self, key: impl Into<SharedString>, value: impl Into<SharedString>) {
        Rc::make_mut(&mut self.0).insert(key.into(), value.into());
    }

    /// Returns the value corresponding to the key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_ref())
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the entries, sorted by key.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    /// Parses a dataset from a JSON object, keeping only the string members.
    pub fn parse(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        let mut dataset = Self::default();
        for (key, value) in object {
            if let Some(value) = value.as_str() {
                dataset.insert(key.clone(), value.to_owned());
            } else {
                tracing::warn!("dataset member `{key}` is not a string");
            }
        }
        dataset
    }
}

impl<K, V> FromIterator<(K, V)> for Dataset
where
    K: Into<SharedString>,
    V: Into<SharedString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self(Rc::new(entries))
    }
}

impl<const N: usize> From<[(&'static str, &'static str); N]> for Dataset {
    #[inline]
    fn from(entries: [(&'static str, &'static str); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<BTreeMap<SharedString, SharedString>> for Dataset {
    #[inline]
    fn from(entries: BTreeMap<SharedString, SharedString>) -> Self {
        Self(Rc::new(entries))
    }
}
