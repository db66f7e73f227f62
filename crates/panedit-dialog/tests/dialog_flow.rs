//! Integration tests for the full dialog flow against a real config store

use std::cell::RefCell;
use std::rc::Rc;

use tempfile::TempDir;

use panedit_core::{ClassId, ControlClass, PanelConfig, PanelItem};
use panedit_dialog::{
    Control, ControlFactory, ControlRegistry, ControlsDialog, DialogOutcome, Message,
    PanelContainer, TomlConfigStore,
};

#[derive(Debug)]
struct FakeControl {
    class: ClassId,
    popup: bool,
}

impl FakeControl {
    fn boxed(class: &str, popup: bool) -> Box<dyn Control> {
        Box::new(Self {
            class: ClassId::new(class),
            popup,
        })
    }
}

impl Control for FakeControl {
    fn class_id(&self) -> &ClassId {
        &self.class
    }

    fn has_popup_menu(&self) -> bool {
        self.popup
    }
}

#[derive(Debug)]
struct FakeFactory {
    class: ControlClass,
}

impl ControlFactory for FakeFactory {
    fn class(&self) -> &ControlClass {
        &self.class
    }

    fn create(&self, _slot: usize) -> Box<dyn Control> {
        FakeControl::boxed(self.class.id.as_str(), false)
    }
}

/// Observable counters shared with a [`CountingPanel`].
#[derive(Default)]
struct PanelLog {
    swaps: usize,
    moves: usize,
    removals: usize,
    adoptions: Vec<(usize, String)>,
}

/// Panel fake that only counts what it was asked to do.
struct CountingPanel {
    log: Rc<RefCell<PanelLog>>,
}

impl CountingPanel {
    fn new() -> (Self, Rc<RefCell<PanelLog>>) {
        let log = Rc::new(RefCell::new(PanelLog::default()));
        (Self { log: log.clone() }, log)
    }
}

impl PanelContainer for CountingPanel {
    fn swap_active(&mut self, _slot: usize, _control: &dyn Control) {
        self.log.borrow_mut().swaps += 1;
    }

    fn move_slot(&mut self, _from: usize, _to: usize) {
        self.log.borrow_mut().moves += 1;
    }

    fn remove_slot(&mut self, _slot: usize) {
        self.log.borrow_mut().removals += 1;
    }

    fn adopt(&mut self, slot: usize, control: Box<dyn Control>) {
        self.log
            .borrow_mut()
            .adoptions
            .push((slot, control.class_id().to_string()));
    }

    fn slot_of(&self, _control: &dyn Control) -> Option<usize> {
        None
    }
}

fn registry() -> ControlRegistry {
    let mut registry = ControlRegistry::new();
    for (id, caption) in [
        ("icon", "Icon launcher"),
        ("clock", "Clock"),
        ("pager", "Desktop pager"),
    ] {
        registry.register(Box::new(FakeFactory {
            class: ControlClass::new(id, caption),
        }));
    }
    registry
}

fn seeded_store(dir: &TempDir) -> TomlConfigStore {
    let mut store = TomlConfigStore::new(dir.path());
    let config = PanelConfig::from_items(vec![
        PanelItem::new("launcher"),
        PanelItem::new("pager"),
        PanelItem::with_popup("icon"),
        PanelItem::new("clock"),
    ]);
    use panedit_dialog::ConfigStore as _;
    store.save(&config).unwrap();
    store
}

#[test]
fn test_change_type_and_position_persists_on_done() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let mut config = store.load();
    let registry = registry();
    let (panel, log) = CountingPanel::new();

    let mut dialog = ControlsDialog::open(
        FakeControl::boxed("icon", true),
        2,
        &mut config,
        &registry,
        Box::new(panel),
        Box::new(TomlConfigStore::new(dir.path())),
    )
    .unwrap();

    // icon -> clock, then move the item to the front
    dialog.handle(Message::SelectType(1)).unwrap();
    dialog.handle(Message::SelectPosition(0)).unwrap();
    dialog.handle(Message::Done).unwrap();

    assert_eq!(dialog.outcome(), Some(DialogOutcome::Kept));
    assert_eq!(log.borrow().swaps, 1);
    assert_eq!(log.borrow().moves, 1);
    assert_eq!(log.borrow().adoptions, vec![(0, "clock".to_string())]);

    // The persisted panel reflects both edits
    let reloaded = TomlConfigStore::new(dir.path()).load();
    let classes: Vec<&str> = reloaded.items().iter().map(|i| i.class.as_str()).collect();
    assert_eq!(classes, vec!["clock", "launcher", "pager", "clock"]);
}

#[test]
fn test_revert_then_done_persists_original_layout() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let saved = store.load();
    let mut config = store.load();
    let registry = registry();
    let (panel, log) = CountingPanel::new();

    let mut dialog = ControlsDialog::open(
        FakeControl::boxed("icon", true),
        2,
        &mut config,
        &registry,
        Box::new(panel),
        Box::new(TomlConfigStore::new(dir.path())),
    )
    .unwrap();

    dialog.handle(Message::SelectType(2)).unwrap();
    dialog.handle(Message::SelectPosition(3)).unwrap();
    dialog.handle(Message::Revert).unwrap();
    assert!(!dialog.state().is_dirty());
    dialog.handle(Message::Done).unwrap();

    // The original instance went back to the panel at its backup slot
    assert_eq!(log.borrow().adoptions, vec![(2, "icon".to_string())]);
    assert_eq!(TomlConfigStore::new(dir.path()).load(), saved);
}

#[test]
fn test_remove_flow_with_confirmation() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let mut config = store.load();
    let registry = registry();
    let (panel, log) = CountingPanel::new();

    let mut dialog = ControlsDialog::open(
        FakeControl::boxed("icon", true),
        2,
        &mut config,
        &registry,
        Box::new(panel),
        Box::new(TomlConfigStore::new(dir.path())),
    )
    .unwrap();

    // The popup menu means removal needs a confirmation round-trip
    dialog.handle(Message::RequestRemove).unwrap();
    assert!(!dialog.is_done());
    assert!(dialog.state().confirm.is_some());

    dialog.handle(Message::ConfirmRemove).unwrap();
    assert_eq!(dialog.outcome(), Some(DialogOutcome::Removed));
    assert_eq!(log.borrow().removals, 1);
    assert!(log.borrow().adoptions.is_empty());

    let reloaded = TomlConfigStore::new(dir.path()).load();
    let classes: Vec<&str> = reloaded.items().iter().map(|i| i.class.as_str()).collect();
    assert_eq!(classes, vec!["launcher", "pager", "clock"]);
}
