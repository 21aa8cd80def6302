//! Fixed loading rules shared by every relay.

/// Maximum number of stacks a single trailer can carry.
pub const TRAILER_CAPACITY: u32 = 98;

/// Bread trays that make up one stack.
pub const BREAD_TRAYS_PER_STACK: u32 = 17;

/// Bulk trays that make up one stack.
pub const BULK_TRAYS_PER_STACK: u32 = 30;

/// Trays received from other plants that make up one stack.
pub const INBOUND_TRAYS_PER_STACK: u32 = 17;

/// Stack-equivalents charged against trailer capacity for each cake pallet.
pub const CAKE_PALLET_STACKS: u32 = 4;
