//! The shared panel-configuration model
//!
//! `PanelConfig` is the ordered list of items the panel displays, one
//! `PanelItem` per slot. The controls dialog mutates this model live while
//! the user edits an item (type swaps, reorders, removal) and the config
//! store persists it when the dialog closes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::class::ClassId;

/// One entry in the panel's ordered item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelItem {
    /// Plugin class occupying this slot
    pub class: ClassId,

    /// Whether the item owns a secondary popup menu.
    /// Items with a popup menu get a confirmation prompt before removal.
    #[serde(default)]
    pub popup: bool,
}

impl PanelItem {
    pub fn new(class: impl Into<ClassId>) -> Self {
        Self {
            class: class.into(),
            popup: false,
        }
    }

    pub fn with_popup(class: impl Into<ClassId>) -> Self {
        Self {
            class: class.into(),
            popup: true,
        }
    }
}

/// The panel's ordered list of items, indexed by slot.
///
/// All mutators keep slot indices dense: removing an item shifts everything
/// after it down by one, exactly like the panel's own group list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    items: Vec<PanelItem>,
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<PanelItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&PanelItem> {
        self.items.get(slot)
    }

    pub fn items(&self) -> &[PanelItem] {
        &self.items
    }

    /// Append an item at the end of the panel.
    pub fn push(&mut self, item: PanelItem) {
        self.items.push(item);
    }

    /// Move the item at `from` so it ends up at slot `to`, shifting the
    /// items in between. Out-of-range indices are ignored with a warning.
    pub fn move_item(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        if from >= self.items.len() || to >= self.items.len() {
            warn!(
                from,
                to,
                len = self.items.len(),
                "ignoring move with out-of-range slot"
            );
            return;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
    }

    /// Remove the item at `slot`, shifting later items down.
    /// Returns the removed item, or `None` if `slot` is out of range.
    pub fn remove(&mut self, slot: usize) -> Option<PanelItem> {
        if slot >= self.items.len() {
            warn!(slot, len = self.items.len(), "ignoring out-of-range remove");
            return None;
        }
        Some(self.items.remove(slot))
    }

    /// Replace the class of the item at `slot`.
    /// Returns false (with a warning) if `slot` is out of range.
    pub fn set_class(&mut self, slot: usize, class: ClassId) -> bool {
        match self.items.get_mut(slot) {
            Some(item) => {
                item.class = class;
                true
            }
            None => {
                warn!(
                    slot,
                    len = self.items.len(),
                    "ignoring set_class on out-of-range slot"
                );
                false
            }
        }
    }

    /// Slot of the first item with the given class, if any.
    pub fn slot_of_class(&self, class: &ClassId) -> Option<usize> {
        self.items.iter().position(|item| &item.class == class)
    }
}
