//! Shared types for the bakery relay planner.
//!
//! Identifiers and loading constants used by both the domain engine and the
//! command-line harness.

pub mod loading;
pub mod types;

pub use loading::{
    BREAD_TRAYS_PER_STACK, BULK_TRAYS_PER_STACK, CAKE_PALLET_STACKS, INBOUND_TRAYS_PER_STACK,
    TRAILER_CAPACITY,
};
pub use types::{SessionId, Version};
