use crate::SharedString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A selectable option of a [`Multiselect`](super::Multiselect).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiselectOption {
    /// The unique identifier of the option.
    value: SharedString,
    /// The optional display text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<SharedString>,
}

impl MultiselectOption {
    /// Creates a new instance with the value.
    #[inline]
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    /// Sets the display text.
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the display text if it has been set.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the display text, falling back to the value.
    #[inline]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }

    /// Parses a list of options from a JSON array.
    ///
    /// Invalid entries are discarded and the order of the others is kept.
    /// A value other than an array yields an empty list.
    pub fn parse_list(value: &Value) -> Vec<Self> {
        let Some(entries) = value.as_array() else {
            if !value.is_null() {
                tracing::warn!("multiselect options should be an array");
            }
            return Vec::new();
        };

        let mut options = Vec::with_capacity(entries.len());
        let mut discarded = 0;
        for entry in entries {
            match Self::try_from(entry) {
                Ok(option) => options.push(option),
                Err(err) => {
                    tracing::debug!("skip a multiselect option: {err}");
                    discarded += 1;
                }
            }
        }
        if discarded > 0 {
            tracing::warn!("{discarded} malformed multiselect options have been discarded");
        }
        options
    }
}

impl TryFrom<&Value> for MultiselectOption {
    type Error = InvalidOption;

    fn try_from(entry: &Value) -> Result<Self, Self::Error> {
        let object = entry.as_object().ok_or(InvalidOption::NotAnObject)?;
        let value = match object.get("value") {
            Some(Value::String(value)) => value.clone(),
            Some(value) => return Err(InvalidOption::NonStringValue(value.clone())),
            None => return Err(InvalidOption::MissingValue),
        };
        let label = object
            .get("label")
            .and_then(|label| label.as_str())
            .map(|label| SharedString::Owned(label.to_owned()));
        Ok(Self {
            value: value.into(),
            label,
        })
    }
}

impl From<&'static str> for MultiselectOption {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<(&'static str, &'static str)> for MultiselectOption {
    #[inline]
    fn from((value, label): (&'static str, &'static str)) -> Self {
        Self::new(value).with_label(label)
    }
}

/// An error for a malformed option entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidOption {
    /// The entry is not a JSON object.
    #[error("option entry is not an object")]
    NotAnObject,
    /// The entry has no `value` field.
    #[error("option entry has no `value`")]
    MissingValue,
    /// The `value` field is not a string.
    #[error("option value `{0}` is not a string")]
    NonStringValue(Value),
}

#[cfg(test)]
mod tests {
    use super::{InvalidOption, MultiselectOption};
    use serde_json::json;

    #[test]
    fn it_falls_back_to_value() {
        let option = MultiselectOption::new("drama");
        assert_eq!(option.display_label(), "drama");
        assert_eq!(option.label(), None);

        let option = option.with_label("Drama");
        assert_eq!(option.display_label(), "Drama");
        assert_eq!(option.value(), "drama");
    }

    #[test]
    fn it_validates_option_entries() {
        let entry = json!({ "value": "action", "label": 7 });
        let option = MultiselectOption::try_from(&entry).unwrap();
        assert_eq!(option, MultiselectOption::new("action"));

        assert_eq!(
            MultiselectOption::try_from(&json!({ "value": 1 })),
            Err(InvalidOption::NonStringValue(json!(1))),
        );
        assert_eq!(
            MultiselectOption::try_from(&json!({ "label": "Action" })),
            Err(InvalidOption::MissingValue),
        );
        assert_eq!(
            MultiselectOption::try_from(&json!(null)),
            Err(InvalidOption::NotAnObject),
        );
    }

    #[test]
    fn it_discards_malformed_options() {
        let entries = json!([
            { "value": "action", "label": "Action" },
            { "value": 42, "label": "Answer" },
            null,
            { "value": null },
            { "value": "drama" },
            "comedy",
        ]);
        let options = MultiselectOption::parse_list(&entries);
        let values = options.iter().map(|o| o.value()).collect::<Vec<_>>();
        assert_eq!(values, ["action", "drama"]);

        assert!(MultiselectOption::parse_list(&json!({ "value": "action" })).is_empty());
    }

    #[test]
    fn it_deserializes_options() {
        let options: Vec<MultiselectOption> =
            serde_json::from_str(r#"[{"value":"action","label":"Action"},{"value":"drama"}]"#)
                .unwrap();
        assert_eq!(options[0].display_label(), "Action");
        assert_eq!(options[1].display_label(), "drama");
        assert!(serde_json::from_str::<MultiselectOption>(r#"{"value":3}"#).is_err());
    }
}
