//! Main update function - handles state transitions (TEA pattern)

use panedit_core::prelude::*;

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::state::{DialogOutcome, DialogPhase, SelectorState};

use super::{Command, UpdateResult};

/// Process a message and update state
/// Returns follow-up messages and/or commands for the dialog shell
pub fn update(state: &mut SelectorState, message: Message) -> UpdateResult {
    match state.phase {
        DialogPhase::Committed(_) => {
            warn!(?message, "message after dialog committed, ignoring");
            UpdateResult::none()
        }
        DialogPhase::ConfirmingRemove => update_confirming(state, message),
        DialogPhase::Open => update_open(state, message),
    }
}

/// Transitions available while the dialog is open.
fn update_open(state: &mut SelectorState, message: Message) -> UpdateResult {
    match message {
        Message::SelectType(n) => handle_select_type(state, n),

        Message::SelectPosition(slot) => handle_select_position(state, slot),

        Message::Revert => handle_revert(state),

        Message::Done => {
            debug!(
                candidate = state.current,
                class = %state.current().control.class_id(),
                "dialog done, keeping current candidate"
            );
            state.phase = DialogPhase::Committed(DialogOutcome::Kept);
            UpdateResult::command(Command::Persist)
        }

        Message::RequestRemove => handle_request_remove(state),

        Message::ConfirmRemove | Message::CancelRemove => {
            warn!(?message, "confirmation message without pending prompt");
            UpdateResult::none()
        }
    }
}

/// Transitions available while the remove confirmation prompt is pending.
fn update_confirming(state: &mut SelectorState, message: Message) -> UpdateResult {
    match message {
        Message::ConfirmRemove => {
            state.confirm = None;
            commit_remove(state)
        }

        Message::CancelRemove => {
            // Back to the prior open state; pending type/position changes
            // (and the dirty flag) stay exactly as they were.
            debug!("remove declined, dialog stays open");
            state.confirm = None;
            state.phase = DialogPhase::Open;
            UpdateResult::none()
        }

        other => {
            warn!(message = ?other, "message ignored while confirming remove");
            UpdateResult::none()
        }
    }
}

fn handle_select_type(state: &mut SelectorState, n: usize) -> UpdateResult {
    if n >= state.candidates.len() {
        debug_assert!(false, "type index {n} out of range");
        warn!(n, len = state.candidates.len(), "type index out of range");
        return UpdateResult::none();
    }

    if n == state.current {
        return UpdateResult::none();
    }

    // The slot belongs to the panel position, not the plugin type: the
    // newly active candidate inherits it from the previous one.
    let slot = state.current().slot;
    state.candidates[n].slot = slot;
    state.current = n;
    state.dirty = true;

    debug!(candidate = n, class = %state.current().control.class_id(), slot, "type changed");
    UpdateResult::command(Command::SwapActive { slot, candidate: n })
}

fn handle_select_position(state: &mut SelectorState, slot: usize) -> UpdateResult {
    if slot >= state.num_slots {
        debug_assert!(false, "slot {slot} out of range");
        warn!(slot, num_slots = state.num_slots, "slot out of range");
        return UpdateResult::none();
    }

    let from = state.current().slot;
    if slot == from {
        return UpdateResult::none();
    }

    state.current_mut().slot = slot;
    state.dirty = true;

    debug!(from, to = slot, "position changed");
    UpdateResult::command(Command::MoveSlot { from, to: slot })
}

/// Last-known-good reset: back to the original type and its backup slot,
/// regardless of how many changes happened in between. Not an undo stack.
fn handle_revert(state: &mut SelectorState) -> UpdateResult {
    let mut commands = Vec::new();

    if state.current != 0 {
        let slot = state.current().slot;
        state.candidates[0].slot = slot;
        state.current = 0;
        commands.push(Command::SwapActive { slot, candidate: 0 });
    }

    let slot = state.candidates[0].slot;
    if slot != state.backup_slot {
        state.candidates[0].slot = state.backup_slot;
        commands.push(Command::MoveSlot {
            from: slot,
            to: state.backup_slot,
        });
    }

    state.dirty = false;

    debug!(backup_slot = state.backup_slot, "reverted to original");
    UpdateResult::commands(commands)
}

fn handle_request_remove(state: &mut SelectorState) -> UpdateResult {
    // The popup-menu capability sits on the original control: that is the
    // item actually being removed from the panel.
    if state.original().control.has_popup_menu() {
        debug!("remove requested, item has popup menu, asking for confirmation");
        state.confirm = Some(ConfirmDialogState::remove_confirmation());
        state.phase = DialogPhase::ConfirmingRemove;
        return UpdateResult::none();
    }

    commit_remove(state)
}

fn commit_remove(state: &mut SelectorState) -> UpdateResult {
    let slot = state.current().slot;
    debug!(slot, "item removed");
    state.phase = DialogPhase::Committed(DialogOutcome::Removed);
    UpdateResult::commands(vec![Command::RemoveSlot { slot }, Command::Persist])
}
