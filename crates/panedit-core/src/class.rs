//! Plugin class identifiers and descriptors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a plugin class ("clock", "launcher", "pager", ...).
///
/// Class ids are the stable keys used in the panel configuration file and in
/// registry lookups; captions are what the user sees in the type selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ClassId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Descriptor for one plugin class: the stable id plus the human-readable
/// caption shown in the type selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlClass {
    pub id: ClassId,
    pub caption: String,
}

impl ControlClass {
    pub fn new(id: impl Into<ClassId>, caption: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            caption: caption.into(),
        }
    }
}
