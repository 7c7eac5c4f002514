use super::{MultiselectOption, OptionPress, Selection};
use crate::{
    class::Class,
    form::{Button, PressEvent},
    icon::CheckIcon,
    popup::PopupMenu,
    state::Interaction,
    SharedString,
};
use dioxus::prelude::*;

/// A row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    /// The option value.
    pub value: SharedString,
    /// The display text.
    pub label: SharedString,
    /// A flag to indicate whether the option has been selected.
    pub selected: bool,
}

/// Builds one row per option, in option order.
pub fn menu_rows(options: &[MultiselectOption], selection: &Selection) -> Vec<MenuRow> {
    options
        .iter()
        .map(|option| MenuRow {
            value: option.value().to_owned().into(),
            label: option.display_label().to_owned().into(),
            selected: selection.contains(option.value()),
        })
        .collect()
}

/// The list of selectable options shown by a [`Multiselect`](super::Multiselect).
///
/// Clicks and key presses inside the menu are reported through the `interaction` signal,
/// so that the enclosing trigger does not react to them.
pub fn MultiselectMenu(props: MultiselectMenuProps) -> Element {
    let rows = menu_rows(&props.options, &props.selected);
    let interaction = props.interaction;
    let on_option_press = props.on_option_press;
    rsx! {
        PopupMenu {
            class: props.menu_class,
            div {
                class: props.class,
                role: "listbox",
                "aria-multiselectable": "true",
                onclick: move |_event| {
                    if let Some(mut interaction) = interaction {
                        let marked = interaction.peek().prevent_toggle_popup();
                        interaction.set(marked);
                    }
                },
                onkeydown: move |_event| {
                    if let Some(mut interaction) = interaction {
                        let marked = interaction.peek().prevent_button_click();
                        interaction.set(marked);
                    }
                },
                if rows.is_empty() {
                    div {
                        class: props.empty_class,
                        div {
                            class: "multiselect-text",
                            "{props.empty_text}"
                        }
                    }
                } else {
                    for row in rows.iter() {
                        MenuOption {
                            key: "{row.value}",
                            row: row.clone(),
                            on_press: on_option_press,
                        }
                    }
                }
            }
        }
    }
}

/// The [`MultiselectMenu`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct MultiselectMenuProps {
    /// The class attribute for the component.
    #[props(into, default = "multiselect-menu")]
    pub class: Class,
    /// A class to apply to the popup menu panel.
    #[props(into, default = "dropdown-menu")]
    pub menu_class: Class,
    /// A class to apply to the placeholder row.
    #[props(into, default = "dropdown-item multiselect-empty")]
    pub empty_class: Class,
    /// The options to be rendered.
    #[props(into, default)]
    pub options: Vec<MultiselectOption>,
    /// The selected values.
    #[props(into, default)]
    pub selected: Selection,
    /// The text of the placeholder row.
    #[props(into, default = "No options available")]
    pub empty_text: SharedString,
    /// A pending interaction to mark for the enclosing trigger.
    pub interaction: Option<Signal<Interaction>>,
    /// An event handler to be called when a row is pressed.
    pub on_option_press: Option<EventHandler<OptionPress>>,
}

/// A selectable row of the [`MultiselectMenu`].
pub fn MenuOption(props: MenuOptionProps) -> Element {
    let row = props.row;
    let value = row.value.clone();
    rsx! {
        Button {
            class: props.class.with("is-selected", row.selected),
            title: row.label.clone(),
            autofocus: row.selected,
            value: row.value.clone(),
            on_click: move |source: PressEvent| {
                if let Some(handler) = props.on_press.as_ref() {
                    handler.call(OptionPress {
                        value: value.clone(),
                        source,
                    });
                }
            },
            div {
                class: "multiselect-text",
                "{row.label}"
            }
            CheckIcon {
                class: "icon multiselect-check",
                width: 12,
            }
        }
    }
}

/// The [`MenuOption`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct MenuOptionProps {
    /// The class attribute for the component.
    #[props(into, default = "dropdown-item multiselect-option")]
    pub class: Class,
    /// The row to be rendered.
    pub row: MenuRow,
    /// An event handler to be called when the row is pressed.
    pub on_press: Option<EventHandler<OptionPress>>,
}
