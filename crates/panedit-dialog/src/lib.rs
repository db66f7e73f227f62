//! panedit-dialog - Item configuration dialog for panedit
//!
//! This crate implements the panel's modal "Change item" dialog as a TEA-style
//! state machine: a [`Message`] enum for the UI events, a pure
//! [`handler::update`] function over [`SelectorState`], and [`Command`] values
//! for the side effects, applied by the [`ControlsDialog`] driver through the
//! collaborator traits ([`PanelContainer`], [`ConfigStore`], [`ConfirmPrompt`]).
//!
//! The dialog lets the user change an item's plugin type (one candidate
//! instance per registered class), move it among its siblings, revert to the
//! state it had when the dialog opened, or remove it - with a confirmation
//! prompt when the item owns a popup menu.

pub mod collaborators;
pub mod config;
pub mod confirm_dialog;
pub mod control;
pub mod dialog;
pub mod handler;
pub mod message;
pub mod registry;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export primary types
pub use collaborators::{ConfigStore, ConfirmPrompt, PanelContainer};
pub use config::TomlConfigStore;
pub use confirm_dialog::ConfirmDialogState;
pub use control::Control;
pub use dialog::ControlsDialog;
pub use handler::{update, Command, UpdateResult};
pub use message::Message;
pub use registry::{ControlFactory, ControlRegistry};
pub use state::{Candidate, DialogOutcome, DialogPhase, SelectorState};

// Re-export core types surfaced by the dialog API
pub use panedit_core::{ClassId, ControlClass, PanelConfig, PanelItem};
