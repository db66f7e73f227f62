//! Message types for the dialog (TEA pattern)

/// All events the controls dialog reacts to.
///
/// Indices arrive pre-validated by the bounded UI controls that produce them
/// (the type selector only offers candidate indices, the position spinner is
/// range-limited at construction), so out-of-range values are treated as a
/// programming error rather than a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Type selector changed to the candidate at this index
    SelectType(usize),

    /// Position spinner changed to this slot
    SelectPosition(usize),

    /// Revert to the original type and its backup slot
    Revert,

    /// Close the dialog keeping the current candidate
    Done,

    /// Remove button pressed (may need confirmation first)
    RequestRemove,

    /// Confirm removal from the confirmation prompt
    ConfirmRemove,

    /// Decline removal from the confirmation prompt
    CancelRemove,
}
