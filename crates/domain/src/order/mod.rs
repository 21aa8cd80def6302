//! Orders: validated line items per route, their builder and simulator.

mod builder;
mod document;
mod inbound;
mod simulate;
mod value_objects;

pub use builder::OrderBuilder;
pub use document::{OrdersDocument, OrdersMetadata};
pub use inbound::{InboundProduct, inbound_analysis};
pub use simulate::{DEFAULT_TRAY_RANGE, OrderSimulator};
pub use value_objects::{ItemRequest, OrderId, OrderItem};

use serde::{Deserialize, Serialize};

use crate::catalog::{LocationName, RouteId};

/// An immutable order for one route on one date.
///
/// Totals are the sums of the item trays and stacks. Orders are produced by
/// [`OrderBuilder`]; the date is an opaque label validated by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    route_id: RouteId,
    location: LocationName,
    date: String,
    items: Vec<OrderItem>,
    total_trays: u32,
    total_stacks: u32,
}

impl Order {
    fn new(
        order_id: OrderId,
        route_id: RouteId,
        location: LocationName,
        date: String,
        items: Vec<OrderItem>,
    ) -> Self {
        let total_trays = items.iter().map(OrderItem::trays).sum();
        let total_stacks = items.iter().map(OrderItem::stacks).sum();
        Self {
            order_id,
            route_id,
            location,
            date,
            items,
            total_trays,
            total_stacks,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn route_id(&self) -> RouteId {
        self.route_id
    }

    pub fn location(&self) -> &LocationName {
        &self.location
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Items in the order they were requested.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total_trays(&self) -> u32 {
        self.total_trays
    }

    pub fn total_stacks(&self) -> u32 {
        self.total_stacks
    }

    /// Returns a one-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{} route {} ({}) on {}: {} items, {} trays, {} stacks",
            self.order_id,
            self.route_id,
            self.location,
            self.date,
            self.items.len(),
            self.total_trays,
            self.total_stacks
        )
    }
}
