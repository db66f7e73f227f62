//! Dialog working state (Model in TEA pattern)

use panedit_core::prelude::*;

use crate::confirm_dialog::ConfirmDialogState;
use crate::control::Control;
use crate::registry::ControlRegistry;

/// One candidate implementation for the panel slot being edited.
///
/// The dialog holds one candidate per known plugin class plus the original;
/// all of them track the same panel slot, since the slot belongs to the
/// panel position and not to the plugin type.
#[derive(Debug)]
pub struct Candidate {
    /// The plugin instance itself
    pub control: Box<dyn Control>,

    /// Slot index within the panel's ordered item list
    pub slot: usize,

    /// True for the instance that existed before the dialog opened
    pub is_original: bool,
}

/// How the dialog ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// User confirmed the dialog; the current candidate stays on the panel
    Kept,

    /// User removed the item; the slot is deleted entirely
    Removed,
}

/// Where the dialog is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    /// Accepting type/position/revert/close events
    #[default]
    Open,

    /// Waiting on the remove confirmation prompt
    ConfirmingRemove,

    /// Terminal: the dialog is closed and its result decided
    Committed(DialogOutcome),
}

/// The dialog's working state.
///
/// Every operation runs against this value; there is no hidden shared state.
/// Exactly one candidate is active at any time, and the active candidate's
/// `slot` always equals the panel slot currently assigned to the edited item.
#[derive(Debug)]
pub struct SelectorState {
    /// Candidates in stable class enumeration order, original first
    pub candidates: Vec<Candidate>,

    /// Index into `candidates` of the active instance
    pub current: usize,

    /// Slot the original instance had when the dialog opened (revert target)
    pub backup_slot: usize,

    /// Whether any change (type or position) was made since last reset-to-clean.
    /// The UI uses this to enable the Revert control.
    pub dirty: bool,

    /// Number of slots in the panel; bound for position selection
    pub num_slots: usize,

    /// Lifecycle phase
    pub phase: DialogPhase,

    /// Pending confirmation prompt while `phase == ConfirmingRemove`
    pub confirm: Option<ConfirmDialogState>,
}

impl SelectorState {
    /// Open the dialog for `original`, currently sitting at `slot` in a panel
    /// with `num_slots` items.
    ///
    /// Builds the candidate list: the original first, then one fresh instance
    /// per registered class, skipping the original's own class. Every
    /// candidate starts bound to the original's slot.
    pub fn new(
        original: Box<dyn Control>,
        slot: usize,
        num_slots: usize,
        registry: &ControlRegistry,
    ) -> Self {
        let candidates = build_candidates(original, slot, registry);
        debug!(
            candidates = candidates.len(),
            slot, num_slots, "controls dialog opened"
        );

        Self {
            candidates,
            current: 0,
            backup_slot: slot,
            dirty: false,
            num_slots,
            phase: DialogPhase::Open,
            confirm: None,
        }
    }

    /// The active candidate.
    pub fn current(&self) -> &Candidate {
        &self.candidates[self.current]
    }

    pub(crate) fn current_mut(&mut self) -> &mut Candidate {
        &mut self.candidates[self.current]
    }

    /// The candidate that existed before the dialog opened.
    pub fn original(&self) -> &Candidate {
        &self.candidates[0]
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the dialog reached a terminal phase.
    pub fn is_done(&self) -> bool {
        matches!(self.phase, DialogPhase::Committed(_))
    }

    /// Terminal outcome, once committed.
    pub fn outcome(&self) -> Option<DialogOutcome> {
        match self.phase {
            DialogPhase::Committed(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Labels for the type selector, one per candidate in candidate order.
    pub fn captions(&self, registry: &ControlRegistry) -> Vec<String> {
        self.candidates
            .iter()
            .map(|c| registry.caption(c.control.class_id()))
            .collect()
    }
}

/// Build the candidate list for a dialog: the original control first, then
/// one fresh instance per registered class other than the original's.
fn build_candidates(
    original: Box<dyn Control>,
    slot: usize,
    registry: &ControlRegistry,
) -> Vec<Candidate> {
    let original_class = original.class_id().clone();

    let mut candidates = vec![Candidate {
        control: original,
        slot,
        is_original: true,
    }];

    for factory in registry.factories() {
        if factory.class().id == original_class {
            continue;
        }
        candidates.push(Candidate {
            control: factory.create(slot),
            slot,
            is_original: false,
        });
    }

    candidates
}
