//! The dialog driver
//!
//! `ControlsDialog` is the modal "Change item" dialog without its widgets:
//! it owns the selector state and the collaborators, runs messages through
//! the update function, and applies the emitted commands. The embedding
//! shell forwards UI events as [`Message`]s until [`ControlsDialog::is_done`]
//! reports a terminal outcome.

use panedit_core::prelude::*;
use panedit_core::PanelConfig;

use crate::collaborators::{ConfigStore, ConfirmPrompt, PanelContainer};
use crate::control::Control;
use crate::handler::{update, Command};
use crate::message::Message;
use crate::registry::ControlRegistry;
use crate::state::{DialogOutcome, SelectorState};

pub struct ControlsDialog<'a> {
    state: SelectorState,
    config: &'a mut PanelConfig,
    container: Box<dyn PanelContainer>,
    store: Box<dyn ConfigStore>,
    finished: bool,
}

impl<'a> ControlsDialog<'a> {
    /// Open the dialog for the item at `slot`.
    ///
    /// `original` is the instance currently on the panel; the registry
    /// provides the alternative classes for the type selector.
    pub fn open(
        original: Box<dyn Control>,
        slot: usize,
        config: &'a mut PanelConfig,
        registry: &ControlRegistry,
        container: Box<dyn PanelContainer>,
        store: Box<dyn ConfigStore>,
    ) -> Result<Self> {
        if slot >= config.len() {
            return Err(Error::slot_out_of_range(slot, config.len()));
        }

        let state = SelectorState::new(original, slot, config.len(), registry);
        Ok(Self {
            state,
            config,
            container,
            store,
            finished: false,
        })
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    pub fn outcome(&self) -> Option<DialogOutcome> {
        self.state.outcome()
    }

    /// Process one UI event, applying every side effect it produces.
    ///
    /// On a terminal transition this also performs the close bookkeeping:
    /// non-selected candidates are dropped, and on a kept outcome the chosen
    /// instance is handed to the panel container.
    pub fn handle(&mut self, message: Message) -> Result<()> {
        let mut next = Some(message);
        while let Some(msg) = next.take() {
            let result = update(&mut self.state, msg);
            for command in result.commands {
                self.dispatch(command)?;
            }
            next = result.message;
        }

        if self.state.is_done() {
            self.finish();
        }
        Ok(())
    }

    /// Resolve a pending remove confirmation through the prompt collaborator.
    ///
    /// No-op unless a confirmation is pending.
    pub fn resolve_confirm(&mut self, prompt: &mut dyn ConfirmPrompt) -> Result<()> {
        let Some(confirm) = self.state.confirm.clone() else {
            return Ok(());
        };

        let message = if prompt.confirm(&confirm) {
            Message::ConfirmRemove
        } else {
            Message::CancelRemove
        };
        self.handle(message)
    }

    /// Apply one emitted command to the collaborators and mirror it into the
    /// shared panel configuration, keeping the model in sync with the live
    /// panel while the dialog is open.
    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::SwapActive { slot, candidate } => {
                let cand = &self.state.candidates[candidate];
                self.container.swap_active(slot, cand.control.as_ref());
                self.config.set_class(slot, cand.control.class_id().clone());
            }

            Command::MoveSlot { from, to } => {
                self.container.move_slot(from, to);
                self.config.move_item(from, to);
            }

            Command::RemoveSlot { slot } => {
                self.container.remove_slot(slot);
                self.config.remove(slot);
            }

            Command::Persist => self.store.save(self.config)?,
        }
        Ok(())
    }

    /// Close bookkeeping, run exactly once after the terminal transition.
    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        match self.state.outcome() {
            Some(DialogOutcome::Kept) => {
                let current = self.state.current;
                let mut kept = None;
                for (i, candidate) in self.state.candidates.drain(..).enumerate() {
                    if i == current {
                        kept = Some(candidate);
                    }
                    // the rest are dropped here
                }

                if let Some(candidate) = kept {
                    debug!(
                        slot = candidate.slot,
                        class = %candidate.control.class_id(),
                        "dialog closed, instance handed to panel"
                    );
                    self.container.adopt(candidate.slot, candidate.control);
                }
            }

            Some(DialogOutcome::Removed) => {
                let discarded = self.state.candidates.len();
                self.state.candidates.clear();
                debug!(discarded, "dialog closed, item removed");
            }

            None => {}
        }
    }
}
