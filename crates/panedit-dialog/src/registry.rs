//! Control class registry
//!
//! The registry holds one factory per plugin class in a stable order. The
//! dialog enumerates it to build the candidate list (and the type selector
//! entries), and looks factories up by class id when rebuilding items from
//! a saved panel configuration.

use std::fmt;

use panedit_core::prelude::*;
use panedit_core::{ClassId, ControlClass};

use crate::control::Control;

/// Constructs fresh [`Control`] instances for one plugin class.
pub trait ControlFactory: fmt::Debug {
    /// Descriptor for the class this factory builds (id + caption).
    fn class(&self) -> &ControlClass;

    /// Build a fresh instance bound to the given slot.
    fn create(&self, slot: usize) -> Box<dyn Control>;
}

/// Enumerable, stable-order set of control factories.
///
/// Registration order is enumeration order; the type selector and the
/// candidate list both rely on it being stable for the dialog's lifetime.
#[derive(Debug, Default)]
pub struct ControlRegistry {
    factories: Vec<Box<dyn ControlFactory>>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory. A second factory for an already-registered class
    /// id is rejected with a warning; the first registration wins.
    pub fn register(&mut self, factory: Box<dyn ControlFactory>) {
        let id = factory.class().id.clone();
        if self.get(&id).is_some() {
            warn!(class = %id, "duplicate control class registration ignored");
            return;
        }
        debug!(class = %id, caption = %factory.class().caption, "registered control class");
        self.factories.push(factory);
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Class descriptors in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ControlClass> {
        self.factories.iter().map(|f| f.class())
    }

    /// Factories in registration order.
    pub fn factories(&self) -> impl Iterator<Item = &dyn ControlFactory> {
        self.factories.iter().map(|f| f.as_ref())
    }

    /// Look up the factory for a class id.
    pub fn get(&self, id: &ClassId) -> Option<&dyn ControlFactory> {
        self.factories
            .iter()
            .find(|f| &f.class().id == id)
            .map(|f| f.as_ref())
    }

    /// Caption for a class id, falling back to the id itself for classes
    /// that are no longer registered.
    pub fn caption(&self, id: &ClassId) -> String {
        match self.get(id) {
            Some(factory) => factory.class().caption.clone(),
            None => id.to_string(),
        }
    }

    /// Build a fresh instance of the given class, bound to `slot`.
    pub fn create(&self, id: &ClassId, slot: usize) -> Result<Box<dyn Control>> {
        let factory = self
            .get(id)
            .ok_or_else(|| Error::unknown_class(id.clone()))?;
        Ok(factory.create(slot))
    }
}
