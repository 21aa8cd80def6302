//! Relay sessions: location demand, trailer allocation, overloads and
//! finalization.
//!
//! A [`RelaySession`] is an event-sourced aggregate. Its command methods
//! validate against current state and return [`RelayEvent`]s; nothing
//! changes until those events are applied. [`RelayService`] does that
//! bookkeeping and keeps the journal.

mod board;
mod document;
mod events;
mod location;
mod planner;
mod service;
mod session;
mod state;
mod trailer;
mod value_objects;

pub use board::{BoardLocation, BoardTrailer, DispatchBoard};
pub use document::{OverloadRecord, RelayDocument, TrailerRecord};
pub use events::{
    AllocatedTrailer, LocationAggregatedData, OverloadAddedData, RelayEvent, SessionOpenedData,
    StackCountEditedData, TrailerFinalizedData, TrailerInfoSetData, TrailersAllocatedData,
};
pub use location::{Location, LocationCounts, LocationKind, MAX_INPUT_COUNT, StackInputs};
pub use planner::{LocationDemand, demand_from_orders};
pub use service::{CommandResult, JournalEntry, MAX_LD_ATTEMPTS, RelayService};
pub use session::RelaySession;
pub use state::{DispatchStatus, FinalizeState};
pub use trailer::{Overload, Trailer};
pub use value_objects::{DayNumber, LdNumber, TrailerId};
