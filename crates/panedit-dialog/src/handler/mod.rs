//! Handler module - TEA update function and side-effect commands
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch

pub(crate) mod update;


// Re-export main entry point
pub use update::update;

/// Side effects the surrounding dialog shell should perform after update.
///
/// The state machine never touches the panel or the disk itself; it emits
/// these and the dialog driver applies them to the collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Swap the visible widget at `slot` to the candidate at this index and
    /// re-register the instance for its slot
    SwapActive { slot: usize, candidate: usize },

    /// Reorder the panel, moving the slot at `from` to `to`
    MoveSlot { from: usize, to: usize },

    /// Delete the slot entirely
    RemoveSlot { slot: usize },

    /// Persist the panel configuration
    Persist,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<crate::message::Message>,
    /// Commands for the dialog shell to perform, in order
    pub commands: Vec<Command>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: crate::message::Message) -> Self {
        Self {
            message: Some(msg),
            commands: Vec::new(),
        }
    }

    pub fn command(command: Command) -> Self {
        Self {
            message: None,
            commands: vec![command],
        }
    }

    pub fn commands(commands: Vec<Command>) -> Self {
        Self {
            message: None,
            commands,
        }
    }
}
