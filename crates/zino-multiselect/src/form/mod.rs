//! Generic form controls.

mod button;

pub use button::{Button, ButtonProps, PressEvent};
