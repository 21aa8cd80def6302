//! Domain layer for the bakery relay planner.
//!
//! This crate provides:
//! - Catalog of products and routes, loaded once and read-only
//! - Unit, tray and stack arithmetic
//! - Order builder, simulator and inbound analysis
//! - Relay session aggregate: location demand, trailer allocation,
//!   overloads and finalization, with a service, board and document
//!
//! The engine is synchronous and does no I/O; loading and saving documents
//! is left to the caller.

pub mod aggregate;
pub mod calculator;
pub mod catalog;
pub mod error;
pub mod order;
pub mod relay;

pub use aggregate::{Aggregate, DomainEvent};
pub use catalog::{Catalog, CatalogDocument, LocationName, Product, ProductId, Route, RouteId, TrayType};
pub use error::{DomainError, NotFoundError, StateError, ValidationError};
pub use order::{ItemRequest, Order, OrderBuilder, OrderItem, OrderSimulator, OrdersDocument};
pub use relay::{
    DayNumber, DispatchBoard, DispatchStatus, LdNumber, LocationKind, RelayDocument, RelayEvent,
    RelayService, RelaySession, StackInputs, TrailerId,
};
