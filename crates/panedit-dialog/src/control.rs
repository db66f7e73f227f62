//! The `Control` trait - one concrete plugin instance occupying a slot.
//!
//! Plugin implementations live outside this crate; the dialog only needs
//! enough surface to identify an instance and to know whether removing it
//! also removes a popup menu.

use std::fmt;

use panedit_core::ClassId;

/// One concrete plugin instance occupying a panel slot.
///
/// Implementations are constructed by a [`crate::registry::ControlFactory`]
/// and owned by the dialog's candidate list until the dialog closes, at which
/// point the chosen instance is handed to the panel container and the rest
/// are dropped.
pub trait Control: fmt::Debug {
    /// The plugin class this instance was built from.
    fn class_id(&self) -> &ClassId;

    /// Whether this item owns a secondary popup menu.
    ///
    /// Items with a popup menu get a confirmation prompt before removal,
    /// since removing the item removes the menu with it.
    fn has_popup_menu(&self) -> bool {
        false
    }
}
