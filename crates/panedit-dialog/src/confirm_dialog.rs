//! Confirm dialog state.
//!
//! Data model for confirmation prompts. Rendering is up to the embedding
//! shell; the dialog core only carries the text and the message each option
//! maps back to.

use crate::message::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Create the remove confirmation prompt shown for items with a popup menu
    pub fn remove_confirmation() -> Self {
        Self::new(
            "Remove item?",
            "Removing an item will also remove its popup menu.\n\n\
             Do you want to remove the item?",
            vec![
                ("Remove", Message::ConfirmRemove),
                ("Cancel", Message::CancelRemove),
            ],
        )
    }
}
