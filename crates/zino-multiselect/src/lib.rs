#![doc = include_str!("../README.md")]
#![doc(html_favicon_url = "https://zino.cc/assets/zino-logo.png")]
#![doc(html_logo_url = "https://zino.cc/assets/zino-logo.svg")]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]

pub mod class;
pub mod form;
pub mod icon;
pub mod multiselect;
pub mod popup;
pub mod prelude;
pub mod state;

/// A clone-on-write string with a static lifetime.
pub type SharedString = std::borrow::Cow<'static, str>;
