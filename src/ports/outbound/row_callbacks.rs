/// Callbacks provided by the host that draws alert rows
pub trait RowCallbacks: Send + Sync {
    /// Invoked once after every re-derivation of the alert list
    fn after_update(&self);

    /// Invoked when an alert menu is opened or closed
    fn set_menu_open(&self, open: bool);
}
