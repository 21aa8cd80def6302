//! Trailers and the overloads they receive.

use chrono::{DateTime, Utc};
use common::TRAILER_CAPACITY;
use serde::{Deserialize, Serialize};

use crate::catalog::LocationName;

use super::{DispatchStatus, FinalizeState, LdNumber, TrailerId};

/// Stacks moved from one location's spare stock onto another location's
/// trailer. Append-only; corrections are new overloads or manual edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overload {
    pub source: LocationName,
    pub destination: TrailerId,
    pub stacks: u32,
}

/// A trailer loaded for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    pub(super) id: TrailerId,
    pub(super) location: LocationName,
    pub(super) stack_count: u32,
    pub(super) overloads: Vec<Overload>,
    pub(super) state: FinalizeState,
    pub(super) ld_number: Option<LdNumber>,
    pub(super) trailer_number: Option<String>,
    pub(super) seal_number: Option<String>,
    pub(super) finalized_at: Option<DateTime<Utc>>,
}

impl Trailer {
    pub(super) fn new(id: TrailerId, location: LocationName, stack_count: u32) -> Self {
        Self {
            id,
            location,
            stack_count,
            overloads: Vec::new(),
            state: FinalizeState::Open,
            ld_number: None,
            trailer_number: None,
            seal_number: None,
            finalized_at: None,
        }
    }

    pub fn id(&self) -> &TrailerId {
        &self.id
    }

    /// Location the trailer was allocated for.
    pub fn location(&self) -> &LocationName {
        &self.location
    }

    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    pub fn capacity(&self) -> u32 {
        TRAILER_CAPACITY
    }

    pub fn remaining_capacity(&self) -> u32 {
        TRAILER_CAPACITY.saturating_sub(self.stack_count)
    }

    pub fn overloads(&self) -> &[Overload] {
        &self.overloads
    }

    /// Stacks received through overloads from other locations.
    pub fn received_stacks(&self) -> u32 {
        self.overloads.iter().map(|o| o.stacks).sum()
    }

    pub fn state(&self) -> FinalizeState {
        self.state
    }

    pub fn is_finalized(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn ld_number(&self) -> Option<&LdNumber> {
        self.ld_number.as_ref()
    }

    /// License plate entered by the operator.
    pub fn trailer_number(&self) -> Option<&str> {
        self.trailer_number.as_deref()
    }

    pub fn seal_number(&self) -> Option<&str> {
        self.seal_number.as_deref()
    }

    pub fn finalized_at(&self) -> Option<DateTime<Utc>> {
        self.finalized_at
    }

    pub fn dispatch_status(&self) -> DispatchStatus {
        DispatchStatus::derive(
            self.state,
            self.trailer_number.is_some(),
            self.seal_number.is_some(),
        )
    }
}
