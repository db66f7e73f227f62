//! Collaborator trait contracts consumed by the dialog driver
//!
//! The state machine emits [`crate::handler::Command`] values; the driver
//! applies them through these traits. Implementations live in the embedding
//! shell (the panel itself, a test fake, or the bundled
//! [`crate::config::TomlConfigStore`]).

use panedit_core::{PanelConfig, Result};

use crate::confirm_dialog::ConfirmDialogState;
use crate::control::Control;

/// The panel container the edited item lives in.
///
/// Accepts swap/reorder/remove requests for the visible panel and takes
/// ownership of the chosen instance when the dialog commits.
pub trait PanelContainer {
    /// Swap the visible content at `slot` to `control` and re-register the
    /// instance for that slot.
    fn swap_active(&mut self, slot: usize, control: &dyn Control);

    /// Move the item at `from` so it ends up at `to`.
    fn move_slot(&mut self, from: usize, to: usize);

    /// Delete the slot entirely.
    fn remove_slot(&mut self, slot: usize);

    /// Take ownership of the instance kept on the panel after commit.
    fn adopt(&mut self, slot: usize, control: Box<dyn Control>);

    /// Slot currently assigned to `control`, if the container knows it.
    fn slot_of(&self, control: &dyn Control) -> Option<usize>;
}

/// Persists the shared panel configuration.
///
/// Invoked once when the dialog commits, and once after a removal (with the
/// slot entry already deleted from the model).
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    fn save(&mut self, config: &PanelConfig) -> Result<()>;
}

/// Synchronous yes/no capability, used only for the remove guard.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPrompt {
    /// Show the prompt and block until the user picks an option.
    /// Returns true when the user confirms.
    fn confirm(&mut self, prompt: &ConfirmDialogState) -> bool;
}
