//! SVG icon shapes.

use crate::class::Class;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaAngleDown, FaCheck},
    IconShape,
};

/// A container for a SVG icon.
pub fn SvgIcon<T: IconShape + Clone + PartialEq + 'static>(props: SvgIconProps<T>) -> Element {
    let width = props.width;
    let height = props.height.unwrap_or(width);
    let style = if props.intrinsic {
        format!("width:{width}px;height:{height}px")
    } else {
        String::new()
    };
    rsx! {
        span {
            class: props.class,
            style: "{style}",
            "aria-hidden": "true",
            dioxus_free_icons::Icon {
                icon: props.shape,
                width: width,
                height: height,
            }
        }
    }
}

/// The [`SvgIcon`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct SvgIconProps<T: IconShape + Clone + PartialEq + 'static> {
    /// The class attribute for the component.
    #[props(into, default = "icon")]
    pub class: Class,
    /// The icon shape to use.
    pub shape: T,
    /// The width of the `<svg>` element. Defaults to 20.
    #[props(default = 20)]
    pub width: u32,
    /// The height of the `<svg>` element.
    #[props(into)]
    pub height: Option<u32>,
    /// A flag to use the instrinsic size for the icon.
    #[props(default)]
    pub intrinsic: bool,
}

/// The directional indicator shown next to a dropdown label.
pub fn ArrowDownIcon(props: IndicatorIconProps) -> Element {
    rsx! {
        SvgIcon {
            class: props.class,
            shape: FaAngleDown,
            width: props.width,
        }
    }
}

/// The check mark shown next to an option label.
pub fn CheckIcon(props: IndicatorIconProps) -> Element {
    rsx! {
        SvgIcon {
            class: props.class,
            shape: FaCheck,
            width: props.width,
        }
    }
}

/// The [`ArrowDownIcon`] and [`CheckIcon`] properties struct.
#[derive(Clone, PartialEq, Props)]
pub struct IndicatorIconProps {
    /// The class attribute for the component.
    #[props(into, default = "icon")]
    pub class: Class,
    /// The width of the `<svg>` element.
    #[props(default = 14)]
    pub width: u32,
}
