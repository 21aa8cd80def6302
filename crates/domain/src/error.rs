//! Domain error types.
//!
//! Every rejected operation leaves the session unchanged and can be retried
//! with corrected input; none of these errors is fatal.

use thiserror::Error;

use crate::catalog::{LocationName, ProductId, RouteId};
use crate::relay::TrailerId;

/// Caller-correctable input problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Ordered units must be greater than zero.
    #[error("Units ordered for product {product_id} must be positive")]
    NonPositiveUnits { product_id: ProductId },

    /// Ordered units must fill whole trays.
    #[error(
        "Invalid units for product {product_id}: {units} is not a multiple of {units_per_tray} units per tray"
    )]
    UnitsNotMultiple {
        product_id: ProductId,
        units: u32,
        units_per_tray: u32,
    },

    /// A product definition is unusable.
    #[error("Invalid product {product_id}: {field} must be positive")]
    InvalidProduct {
        product_id: ProductId,
        field: &'static str,
    },

    /// An id appears twice in a document.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// An order was submitted without items.
    #[error("Order for route {route_id} has no items")]
    EmptyOrder { route_id: RouteId },

    /// An order's location does not own the route.
    #[error("Route {route_id} belongs to {expected}, not {actual}")]
    LocationMismatch {
        route_id: RouteId,
        expected: LocationName,
        actual: LocationName,
    },

    /// Simulated orders need room for at least one item.
    #[error("Max items per order must be at least 1")]
    InvalidItemLimit,

    /// Simulated tray ranges must be non-empty and start at one or more.
    #[error("Invalid tray range {start}..={end}")]
    InvalidTrayRange { start: u32, end: u32 },

    /// A raw location input count is negative.
    #[error("Invalid {field} for location {location}: {value} (must not be negative)")]
    NegativeCount {
        location: LocationName,
        field: &'static str,
        value: i64,
    },

    /// A raw location input count is implausibly large.
    #[error("Invalid {field} for location {location}: {value} (limit {limit})")]
    CountTooLarge {
        location: LocationName,
        field: &'static str,
        value: i64,
        limit: i64,
    },

    /// A stored location total disagrees with its inputs.
    #[error("Location {location} declares {declared} total stacks, inputs give {computed}")]
    TotalMismatch {
        location: LocationName,
        declared: u32,
        computed: u32,
    },

    /// A stored finalized trailer has no load number.
    #[error("Trailer {trailer_id} is finalized but has no LD number")]
    MissingLdNumber { trailer_id: TrailerId },

    /// A stored finalized trailer carries a malformed load number.
    #[error("Trailer {trailer_id} has invalid LD number {value:?} (expected 10 digits)")]
    InvalidLdNumber { trailer_id: TrailerId, value: String },

    /// A stored trailer lists more overload stacks than it holds.
    #[error("Trailer {trailer_id} lists {received} overload stacks but holds {stack_count}")]
    OverloadExceedsLoad {
        trailer_id: TrailerId,
        received: u64,
        stack_count: u32,
    },

    /// A stored location has sent more stacks than it demands.
    #[error("Location {location} sent {sent} stacks but demands only {total}")]
    OversentStacks {
        location: LocationName,
        sent: u64,
        total: u32,
    },

    /// An edit would drop stacks another location moved onto the trailer.
    #[error("Trailer {trailer_id} holds {received} overload stacks, cannot go down to {requested}")]
    BelowReceived {
        trailer_id: TrailerId,
        requested: u32,
        received: u32,
    },

    /// A trailer stack count is negative.
    #[error("Invalid stack count for trailer {trailer_id}: {value} (must not be negative)")]
    NegativeStackCount { trailer_id: TrailerId, value: i64 },

    /// A trailer would hold more stacks than it can carry.
    #[error("Trailer {trailer_id} cannot hold {requested} stacks (capacity {capacity})")]
    CapacityExceeded {
        trailer_id: TrailerId,
        requested: i64,
        capacity: u32,
    },

    /// A stored trailer declares a capacity other than the fixed one.
    #[error("Trailer {trailer_id} declares capacity {declared}, expected {expected}")]
    CapacityMismatch {
        trailer_id: TrailerId,
        declared: u32,
        expected: u32,
    },

    /// An overload asks for more stacks than the source has left.
    #[error("Location {location} has {spare} spare stacks, cannot move {requested}")]
    InsufficientSpare {
        location: LocationName,
        requested: u32,
        spare: u32,
    },

    /// An overload must move at least one stack.
    #[error("Overload from {location} must move at least one stack")]
    NonPositiveTransfer { location: LocationName },

    /// Stack allocation of a finalized trailer is frozen.
    #[error("Trailer {trailer_id} is finalized; its stack count cannot change")]
    TrailerFinalized { trailer_id: TrailerId },

    /// Day numbers run from 1 to 6.
    #[error("Invalid day: {0} (must be between 1 and 6)")]
    InvalidDay(u8),
}

/// References to entities that do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("Product not found: {0}")]
    Product(ProductId),

    #[error("Route not found: {0}")]
    Route(RouteId),

    #[error("Location not found: {0}")]
    Location(LocationName),

    #[error("Trailer not found: {0}")]
    Trailer(TrailerId),
}

/// Operations attempted against a state that has moved on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Finalization is one-way.
    #[error("Trailer {trailer_id} is already finalized")]
    AlreadyFinalized { trailer_id: TrailerId },

    /// Location inputs are frozen once trailers exist for it.
    #[error("Location {location} already has trailers; its inputs are locked")]
    LocationLocked { location: LocationName },

    /// Trailers are created once per location.
    #[error("Location {location} is already allocated to {trailers} trailer(s)")]
    AlreadyAllocated {
        location: LocationName,
        trailers: usize,
    },

    /// No unused LD number could be drawn.
    #[error("Could not draw an unused LD number after {attempts} attempts")]
    DuplicateLdNumber { attempts: usize },

    /// A session is opened exactly once.
    #[error("Relay session already opened")]
    SessionAlreadyOpened,

    /// Commands need an opened session.
    #[error("Relay session has not been opened")]
    SessionNotOpened,
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("State error: {0}")]
    State(#[from] StateError),

    /// A document could not be parsed or written.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }

    pub fn is_state(&self) -> bool {
        matches!(self, DomainError::State(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_offending_item() {
        let err = ValidationError::UnitsNotMultiple {
            product_id: ProductId::new(4021),
            units: 100,
            units_per_tray: 12,
        };
        assert_eq!(
            err.to_string(),
            "Invalid units for product 4021: 100 is not a multiple of 12 units per tray"
        );
    }

    #[test]
    fn test_domain_error_classification() {
        let err: DomainError = NotFoundError::Location(LocationName::new("Oxford")).into();
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Not found: Location not found: Oxford");

        let err: DomainError = StateError::SessionAlreadyOpened.into();
        assert!(err.is_state());
    }
}
