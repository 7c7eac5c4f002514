use crate::{class::Class, state::Interaction, SharedString};
use dioxus::prelude::*;
use std::fmt;

/// A focusable button which can contain other buttons.
///
/// It is rendered as a `div` with the `button` role, so the dropdown menu can be nested
/// inside its trigger. Pressing `Enter` or `Space` simulates a click.
pub fn Button(props: ButtonProps) -> Element {
    let disabled = props.disabled;
    let interaction = props.interaction;
    let title = props.title;
    let value = props.value;
    rsx! {
        div {
            class: props.class.with("is-disabled", disabled),
            role: "button",
            tabindex: if disabled { "-1" } else { "0" },
            title: if !title.is_empty() { "{title}" },
            "aria-disabled": if disabled { "true" },
            "data-autofocus": if props.autofocus { "true" },
            "data-value": value.map(|value| value.into_owned()),
            onclick: move |event| {
                let pending = interaction
                    .map(|mut signal| signal.take())
                    .unwrap_or_default();
                if disabled || pending.toggle_popup_prevented {
                    return;
                }
                if let Some(handler) = props.on_click.as_ref() {
                    handler.call(PressEvent::Mouse(event));
                }
            },
            onkeydown: move |event| {
                let pending = interaction
                    .map(|mut signal| signal.take())
                    .unwrap_or_default();
                if disabled || pending.button_click_prevented || !is_activation_key(&event.key()) {
                    return;
                }
                if let Some(handler) = props.on_click.as_ref() {
                    event.prevent_default();
                    handler.call(PressEvent::Keyboard(event));
                }
            },
            { props.children }
        }
    }
}

/// The [`Button`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// The class attribute for the component.
    #[props(into, default = "button")]
    pub class: Class,
    /// The title for the button.
    #[props(into, default)]
    pub title: SharedString,
    /// A flag to determine whether the button is disabled or not.
    #[props(default)]
    pub disabled: bool,
    /// A flag to mark the button as the one to focus first.
    #[props(default)]
    pub autofocus: bool,
    /// A value exposed as the `data-value` attribute.
    #[props(into)]
    pub value: Option<SharedString>,
    /// A pending interaction which is consumed on every click and key press, even when
    /// the button is disabled. A click is not forwarded if it has `toggle_popup_prevented` set,
    /// and a key press is not turned into a click if it has `button_click_prevented` set.
    pub interaction: Option<Signal<Interaction>>,
    /// An event handler to be called when the button is pressed.
    pub on_click: Option<EventHandler<PressEvent>>,
    /// The children to render within the component.
    children: Element,
}

/// The event that pressed a [`Button`].
#[derive(Clone)]
pub enum PressEvent {
    /// A mouse click.
    Mouse(MouseEvent),
    /// A key press of `Enter` or `Space`.
    Keyboard(KeyboardEvent),
}

impl fmt::Debug for PressEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PressEvent::Mouse(_) => f.write_str("PressEvent::Mouse"),
            PressEvent::Keyboard(event) => write!(f, "PressEvent::Keyboard({})", event.key()),
        }
    }
}

/// Returns `true` if the key activates a button.
fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_activation_key;
    use dioxus::prelude::Key;

    #[test]
    fn it_activates_on_enter_and_space() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_owned())));
        assert!(!is_activation_key(&Key::Character("a".to_owned())));
        assert!(!is_activation_key(&Key::Escape));
    }
}
