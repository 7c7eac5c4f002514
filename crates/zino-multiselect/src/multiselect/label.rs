use super::{MultiselectOption, Selection};
use std::borrow::Cow;

/// The source of the trigger label content, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// The caller renders the whole label content.
    Content,
    /// The caller renders the label text, shown next to the arrow icon.
    Text,
    /// The labels of the selected options.
    Selection,
    /// The title of the component.
    Title,
}

impl LabelMode {
    /// Picks the label source for the renderers supplied by the caller and the selection.
    pub fn resolve(has_content_renderer: bool, has_text_renderer: bool, selection: &Selection) -> Self {
        if has_content_renderer {
            LabelMode::Content
        } else if has_text_renderer {
            LabelMode::Text
        } else if !selection.is_empty() {
            LabelMode::Selection
        } else {
            LabelMode::Title
        }
    }
}

/// Joins the display labels of the selected options in option order,
/// falling back to the title if nothing has been selected.
///
/// The result is empty if none of the selected values is a known option.
pub fn default_label<'a>(
    options: &'a [MultiselectOption],
    selection: &Selection,
    title: &'a str,
) -> Cow<'a, str> {
    if selection.is_empty() {
        return Cow::Borrowed(title);
    }

    let labels = options
        .iter()
        .filter(|option| selection.contains(option.value()))
        .map(|option| option.display_label())
        .collect::<Vec<_>>();
    if let [label] = labels.as_slice() {
        Cow::Borrowed(*label)
    } else {
        Cow::Owned(labels.join(", "))
    }
}
