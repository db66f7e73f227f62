//! Shared helpers for unit tests

use panedit_core::{ClassId, ControlClass};

use crate::control::Control;
use crate::registry::{ControlFactory, ControlRegistry};
use crate::state::SelectorState;

/// Minimal control used across the test suite.
#[derive(Debug)]
pub(crate) struct TestControl {
    class: ClassId,
    popup: bool,
}

impl TestControl {
    pub(crate) fn new(class: &str) -> Self {
        Self {
            class: ClassId::new(class),
            popup: false,
        }
    }

    pub(crate) fn with_popup(class: &str) -> Self {
        Self {
            class: ClassId::new(class),
            popup: true,
        }
    }
}

impl Control for TestControl {
    fn class_id(&self) -> &ClassId {
        &self.class
    }

    fn has_popup_menu(&self) -> bool {
        self.popup
    }
}

#[derive(Debug)]
pub(crate) struct TestFactory {
    class: ControlClass,
}

impl TestFactory {
    pub(crate) fn new(id: &str, caption: &str) -> Self {
        Self {
            class: ControlClass::new(id, caption),
        }
    }
}

impl ControlFactory for TestFactory {
    fn class(&self) -> &ControlClass {
        &self.class
    }

    fn create(&self, _slot: usize) -> Box<dyn Control> {
        Box::new(TestControl::new(self.class.id.as_str()))
    }
}

/// Boxed test control for a class id.
pub(crate) fn test_control(class: &str) -> Box<dyn Control> {
    Box::new(TestControl::new(class))
}

/// Registry with one factory per id, captioned with the capitalized id.
pub(crate) fn test_registry(ids: &[&str]) -> ControlRegistry {
    let mut registry = ControlRegistry::new();
    for id in ids {
        let mut caption = id.to_string();
        if let Some(first) = caption.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        registry.register(Box::new(TestFactory::new(id, &caption)));
    }
    registry
}

/// Open a dialog state for an original `icon` control at `slot`, with
/// `clock` and `pager` as the alternative classes.
pub(crate) fn open_dialog(slot: usize, num_slots: usize) -> SelectorState {
    let registry = test_registry(&["icon", "clock", "pager"]);
    SelectorState::new(test_control("icon"), slot, num_slots, &registry)
}

/// Same as [`open_dialog`] but the original item owns a popup menu.
pub(crate) fn open_dialog_with_popup(slot: usize, num_slots: usize) -> SelectorState {
    let registry = test_registry(&["icon", "clock", "pager"]);
    SelectorState::new(
        Box::new(TestControl::with_popup("icon")),
        slot,
        num_slots,
        &registry,
    )
}
