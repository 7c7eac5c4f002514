/// The outcome of a user interaction, handed from an inner handler to the
/// container that owns the affected behavior.
///
/// Each flag suppresses one default reaction of the container:
///
/// - `toggle_popup_prevented`: the trigger does not toggle the popup;
/// - `close_menu_prevented`: the menu stays open after a selection;
/// - `button_click_prevented`: the trigger does not turn a key press into a click.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    /// Prevents the trigger from toggling the popup.
    pub toggle_popup_prevented: bool,
    /// Prevents the menu from closing after a selection.
    pub close_menu_prevented: bool,
    /// Prevents the trigger from simulating a click for a key press.
    pub button_click_prevented: bool,
}

impl Interaction {
    /// Creates a new instance without any suppression.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new instance which keeps the menu open after a selection.
    #[inline]
    pub fn keep_open() -> Self {
        Self::new().prevent_close_menu()
    }

    /// Marks the popup toggle as prevented.
    #[inline]
    #[must_use]
    pub fn prevent_toggle_popup(mut self) -> Self {
        self.toggle_popup_prevented = true;
        self
    }

    /// Marks the menu close as prevented.
    #[inline]
    #[must_use]
    pub fn prevent_close_menu(mut self) -> Self {
        self.close_menu_prevented = true;
        self
    }

    /// Marks the click simulation as prevented.
    #[inline]
    #[must_use]
    pub fn prevent_button_click(mut self) -> Self {
        self.button_click_prevented = true;
        self
    }
}
