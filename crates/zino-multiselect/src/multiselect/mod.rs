//! Dropdown menu button for picking multiple options.

use crate::{
    class::Class,
    form::Button,
    icon::ArrowDownIcon,
    popup::{Direction, Popup},
    state::{use_binary_state, Interaction, Transition},
    SharedString,
};
use dioxus::prelude::*;

mod dataset;
mod event;
mod label;
mod menu;
mod option;
mod selection;

pub use dataset::Dataset;
pub use event::{MenuEvent, MenuEventKind, OptionPress, SelectEvent};
pub use label::{default_label, LabelMode};
pub use menu::{
    menu_rows, MenuOption, MenuOptionProps, MenuRow, MultiselectMenu, MultiselectMenuProps,
};
pub use option::{InvalidOption, MultiselectOption};
pub use selection::Selection;

/// A menu button which toggles a popup list of selectable options.
///
/// The selection is controlled by the caller. The component only owns the visibility
/// of the menu and reports `open`, `close` and `select` events, each of them carrying
/// the `dataset` of the component.
pub fn Multiselect(props: MultiselectProps) -> Element {
    let pending = use_signal(Interaction::default);
    let on_open = props.on_open;
    let on_close = props.on_close;
    let transition_dataset = props.dataset.clone();
    let on_transition = use_callback(move |transition: Transition| {
        let handler = if transition.is_open() {
            on_open
        } else {
            on_close
        };
        if let Some(handler) = handler {
            handler.call(MenuEvent::new(transition, transition_dataset.clone()));
        }
    });
    let mut menu = use_binary_state(false, on_transition);
    let open = menu.is_open();

    let label_mode = LabelMode::resolve(
        props.render_label_content.is_some(),
        props.render_label_text.is_some(),
        &props.selected,
    );
    let label_content = match (label_mode, props.render_label_content) {
        (LabelMode::Content, Some(render)) => render.call(()),
        _ => {
            let text: SharedString = match (label_mode, props.render_label_text) {
                (LabelMode::Text, Some(render)) => render.call(()).into(),
                _ => default_label(&props.options, &props.selected, &props.title)
                    .into_owned()
                    .into(),
            };
            rsx! {
                div {
                    class: "multiselect-text",
                    "{text}"
                }
                ArrowDownIcon {
                    class: "icon multiselect-arrow",
                }
            }
        }
    };

    let mut label_class = props.label_class.clone();
    label_class.extend(&props.class);
    label_class.add_if("is-active", open);

    let on_select = props.on_select;
    let select_dataset = props.dataset.clone();
    rsx! {
        Popup {
            class: props.popup_class,
            open,
            direction: props.direction,
            on_close_request: move |_request| menu.close(),
            Button {
                class: label_class,
                title: props.title.clone(),
                disabled: props.disabled,
                interaction: pending,
                on_click: move |_press| menu.toggle(),
                { label_content }
                if open {
                    MultiselectMenu {
                        options: props.options.clone(),
                        selected: props.selected.clone(),
                        empty_text: props.empty_text.clone(),
                        interaction: pending,
                        on_option_press: move |press: OptionPress| {
                            let event = press.into_select_event(select_dataset.clone());
                            let interaction = on_select
                                .map(|handler| handler.call(event))
                                .unwrap_or_default();
                            if select_action(interaction) == MenuAction::Close {
                                menu.close();
                            }
                        },
                    }
                }
            }
        }
    }
}

/// The [`Multiselect`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct MultiselectProps {
    /// Extra classes to apply to the trigger button.
    #[props(into, default)]
    pub class: Class,
    /// A class to apply to the popup container.
    #[props(into, default = "dropdown multiselect")]
    pub popup_class: Class,
    /// A class to apply to the trigger button.
    #[props(into, default = "button multiselect-label-container")]
    pub label_class: Class,
    /// The placement of the menu.
    #[props(default)]
    pub direction: Direction,
    /// The title of the trigger button, also used as the label if nothing has been selected.
    #[props(into, default)]
    pub title: SharedString,
    /// The selectable options.
    #[props(into, default)]
    pub options: Vec<MultiselectOption>,
    /// The selected values.
    #[props(into, default)]
    pub selected: Selection,
    /// A flag to determine whether the trigger button is disabled or not.
    #[props(default)]
    pub disabled: bool,
    /// Opaque string pairs attached to every emitted event.
    #[props(into, default)]
    pub dataset: Dataset,
    /// The text shown in the menu if there are no options.
    #[props(into, default = "No options available")]
    pub empty_text: SharedString,
    /// A renderer for the whole label content of the trigger button.
    pub render_label_content: Option<Callback<(), Element>>,
    /// A renderer for the label text of the trigger button.
    pub render_label_text: Option<Callback<(), String>>,
    /// An event handler to be called when the menu has been opened.
    pub on_open: Option<EventHandler<MenuEvent>>,
    /// An event handler to be called when the menu has been closed.
    pub on_close: Option<EventHandler<MenuEvent>>,
    /// An event handler to be called when an option is activated.
    /// The returned [`Interaction`] can keep the menu open.
    pub on_select: Option<Callback<SelectEvent, Interaction>>,
}

/// The reaction of the menu to a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    /// Leave the menu as it is.
    Keep,
    /// Close the menu.
    Close,
}

/// Decides how the menu reacts to a selection, given the interaction returned by the caller.
fn select_action(interaction: Interaction) -> MenuAction {
    if interaction.close_menu_prevented {
        MenuAction::Keep
    } else {
        MenuAction::Close
    }
}
