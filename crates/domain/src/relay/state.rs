//! Trailer finalization state machine and derived dispatch status.

use serde::{Deserialize, Serialize};

/// Finalization state of a trailer.
///
/// State transitions:
/// ```text
/// Open ──► Finalized
/// ```
/// `Finalized` is terminal. It freezes the stack count; identification
/// fields (trailer and seal number) stay writable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FinalizeState {
    /// Stacks can still be edited and overloads received.
    #[default]
    Open,

    /// Load number assigned, stack count frozen (terminal state).
    Finalized,
}

impl FinalizeState {
    /// Returns true if the stack count can change in this state.
    pub fn can_edit_stacks(&self) -> bool {
        matches!(self, FinalizeState::Open)
    }

    /// Returns true if the trailer can be finalized in this state.
    pub fn can_finalize(&self) -> bool {
        matches!(self, FinalizeState::Open)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FinalizeState::Finalized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FinalizeState::Open => "Open",
            FinalizeState::Finalized => "Finalized",
        }
    }
}

impl std::fmt::Display for FinalizeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dispatch status shown to operators.
///
/// Never stored: it is computed from the finalize state and the
/// identification fields every time it is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DispatchStatus {
    /// Still loading or missing identification (shown red).
    Active,

    /// Finalized with trailer and seal numbers recorded (shown green).
    Dispatched,
}

impl DispatchStatus {
    pub fn derive(state: FinalizeState, has_trailer_number: bool, has_seal_number: bool) -> Self {
        if state.is_terminal() && has_trailer_number && has_seal_number {
            DispatchStatus::Dispatched
        } else {
            DispatchStatus::Active
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStatus::Active => "Active",
            DispatchStatus::Dispatched => "Dispatched",
        }
    }
}

impl std::fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
