//! # panedit-core - Core Domain Types
//!
//! Foundation crate for panedit. Provides domain types, error handling,
//! and logging setup for the panel item editor.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`class`, `panel`)
//! - [`ClassId`] - Identifier of a plugin class ("clock", "launcher", ...)
//! - [`ControlClass`] - Descriptor for a plugin class (id + caption)
//! - [`PanelConfig`] - The panel's ordered list of items, shared with the dialog
//! - [`PanelItem`] - One entry in the panel configuration
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use panedit_core::prelude::*;
//! ```

pub mod class;
pub mod error;
pub mod logging;
pub mod panel;

/// Prelude for common imports used throughout all panedit crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use class::{ClassId, ControlClass};
pub use error::{Error, Result, ResultExt};
pub use panel::{PanelConfig, PanelItem};
