//! Re-exports of components and common types.

pub use crate::{
    class::Class,
    form::{Button, PressEvent},
    icon::{ArrowDownIcon, CheckIcon, SvgIcon},
    multiselect::{
        Dataset, MenuEvent, MenuEventKind, Multiselect, MultiselectMenu, MultiselectOption,
        OptionPress, SelectEvent, Selection,
    },
    popup::{CloseRequest, Direction, Popup, PopupMenu},
    state::{use_binary_state, BinaryState, Interaction, Transition},
    SharedString,
};
