//! Popup containers with outside dismissal.

use crate::class::Class;
use dioxus::prelude::*;

mod direction;

pub use direction::{Direction, ParseDirectionError};

/// A container which shows a menu next to its label while it is open.
///
/// Clicking outside of the popup or pressing `Escape` requests it to be closed.
/// The owner decides whether to honor the request.
pub fn Popup(props: PopupProps) -> Element {
    let open = props.open;
    let direction = props.direction;
    let on_close_request = props.on_close_request;
    rsx! {
        div {
            class: props
                .class
                .with("is-active", open)
                .with("is-up", direction.is_up())
                .with("is-right", direction.is_right()),
            "data-direction": "{direction}",
            onkeydown: move |event| {
                if open && event.key() == Key::Escape {
                    if let Some(handler) = on_close_request.as_ref() {
                        handler.call(CloseRequest::Escape);
                    }
                }
            },
            if open {
                div {
                    class: props.backdrop_class,
                    position: "fixed",
                    top: "0",
                    right: "0",
                    bottom: "0",
                    left: "0",
                    z_index: 19,
                    onclick: move |_event| {
                        if let Some(handler) = on_close_request.as_ref() {
                            handler.call(CloseRequest::Outside);
                        }
                    },
                }
            }
            { props.children }
        }
    }
}

/// The [`Popup`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct PopupProps {
    /// The class attribute for the component.
    #[props(into, default = "dropdown popup")]
    pub class: Class,
    /// A class to apply to the backdrop which catches outside clicks.
    #[props(into, default = "popup-backdrop")]
    pub backdrop_class: Class,
    /// A flag to indicate whether the popup is open or not.
    #[props(default)]
    pub open: bool,
    /// The placement of the menu.
    #[props(default)]
    pub direction: Direction,
    /// An event handler to be called when the popup asks to be closed.
    pub on_close_request: Option<EventHandler<CloseRequest>>,
    /// The label of the popup, which usually renders the menu as its child.
    children: Element,
}

/// The reason why a [`Popup`] asks to be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseRequest {
    /// A click outside of the popup.
    Outside,
    /// A press of the `Escape` key.
    Escape,
}

/// The menu panel of a [`Popup`].
pub fn PopupMenu(props: PopupMenuProps) -> Element {
    rsx! {
        div {
            class: props.class,
            role: "menu",
            position: "absolute",
            z_index: 20,
            div {
                class: props.content_class,
                { props.children }
            }
        }
    }
}

/// The [`PopupMenu`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct PopupMenuProps {
    /// The class attribute for the component.
    #[props(into, default = "dropdown-menu")]
    pub class: Class,
    /// A class to apply to the menu content.
    #[props(into, default = "dropdown-content")]
    pub content_class: Class,
    /// The children to render within the component.
    children: Element,
}
