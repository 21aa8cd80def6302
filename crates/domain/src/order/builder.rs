//! Assembles validated orders from item requests.

use crate::catalog::{Catalog, LocationName, RouteId};
use crate::error::{DomainError, ValidationError};

use super::{ItemRequest, Order, OrderId, OrderItem};

/// Builds orders against a catalog.
///
/// Building is all-or-nothing: the first unknown reference or invalid item
/// rejects the whole order.
#[derive(Debug, Clone, Copy)]
pub struct OrderBuilder<'a> {
    catalog: &'a Catalog,
}

impl<'a> OrderBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Creates an order for a route owned by `location`.
    ///
    /// Fails with `NotFound` for an unknown route or product, and with
    /// `Validation` when the location does not own the route, the order is
    /// empty, or an item's units are not a positive multiple of the
    /// product's units-per-tray.
    #[tracing::instrument(skip(self, date, items), fields(items = items.len()))]
    pub fn create_order(
        &self,
        route_id: RouteId,
        location: &LocationName,
        date: impl Into<String>,
        items: &[ItemRequest],
    ) -> Result<Order, DomainError> {
        let route = self.catalog.route(route_id)?;
        if &route.location != location {
            return Err(ValidationError::LocationMismatch {
                route_id,
                expected: route.location.clone(),
                actual: location.clone(),
            }
            .into());
        }

        if items.is_empty() {
            return Err(ValidationError::EmptyOrder { route_id }.into());
        }

        let mut lines = Vec::with_capacity(items.len());
        for request in items {
            let product = self.catalog.product(request.product_id)?;
            lines.push(OrderItem::for_product(product, request.units)?);
        }

        let order = Order::new(
            OrderId::generate(),
            route_id,
            location.clone(),
            date.into(),
            lines,
        );
        tracing::debug!(
            order_id = %order.order_id(),
            total_trays = order.total_trays(),
            total_stacks = order.total_stacks(),
            "order created"
        );

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogDocument, Product, ProductId, Route, TrayType};
    use crate::error::NotFoundError;

    fn catalog() -> Catalog {
        Catalog::from_document(CatalogDocument {
            products: vec![
                Product::new(4021, "Butter Bread", 12, TrayType::Bread, 17, 191).unwrap(),
                Product::new(5110, "Hamburger Buns", 8, TrayType::Bulk, 30, 191).unwrap(),
            ],
            routes: vec![Route::new(6278, "Anderson"), Route::new(5539, "Galax")],
            sister_plants: vec![],
        })
        .unwrap()
    }

    #[test]
    fn test_create_order_sums_totals() {
        let catalog = catalog();
        let order = OrderBuilder::new(&catalog)
            .create_order(
                RouteId::new(6278),
                &LocationName::new("Anderson"),
                "12/25/2024",
                &[ItemRequest::new(4021, 144), ItemRequest::new(5110, 8 * 31)],
            )
            .unwrap();

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.total_trays(), 12 + 31);
        assert_eq!(order.total_stacks(), 1 + 2);
        assert_eq!(order.date(), "12/25/2024");
        assert_eq!(order.location().as_str(), "Anderson");
    }

    #[test]
    fn test_non_multiple_units_rejected_with_item() {
        let catalog = catalog();
        let result = OrderBuilder::new(&catalog).create_order(
            RouteId::new(6278),
            &LocationName::new("Anderson"),
            "12/25/2024",
            &[ItemRequest::new(4021, 144), ItemRequest::new(4021, 100)],
        );

        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::UnitsNotMultiple {
                units: 100,
                ..
            }))
        ));
    }

    #[test]
    fn test_unknown_route_and_product() {
        let catalog = catalog();
        let builder = OrderBuilder::new(&catalog);

        let result = builder.create_order(
            RouteId::new(1),
            &LocationName::new("Anderson"),
            "12/25/2024",
            &[ItemRequest::new(4021, 12)],
        );
        assert!(matches!(
            result,
            Err(DomainError::NotFound(NotFoundError::Route(_)))
        ));

        let result = builder.create_order(
            RouteId::new(6278),
            &LocationName::new("Anderson"),
            "12/25/2024",
            &[ItemRequest::new(9999, 12)],
        );
        assert!(matches!(
            result,
            Err(DomainError::NotFound(NotFoundError::Product(id))) if id == ProductId::new(9999)
        ));
    }

    #[test]
    fn test_location_must_own_route() {
        let catalog = catalog();
        let result = OrderBuilder::new(&catalog).create_order(
            RouteId::new(6278),
            &LocationName::new("Galax"),
            "12/25/2024",
            &[ItemRequest::new(4021, 12)],
        );
        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::LocationMismatch { .. }))
        ));
    }

    #[test]
    fn test_empty_order_rejected() {
        let catalog = catalog();
        let result = OrderBuilder::new(&catalog).create_order(
            RouteId::new(5539),
            &LocationName::new("Galax"),
            "12/25/2024",
            &[],
        );
        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::EmptyOrder { .. }))
        ));
    }

    #[test]
    fn test_order_document_round_trip() {
        let catalog = catalog();
        let order = OrderBuilder::new(&catalog)
            .create_order(
                RouteId::new(5539),
                &LocationName::new("Galax"),
                "12/25/2024",
                &[ItemRequest::new(5110, 80)],
            )
            .unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["route_id"], 5539);
        assert_eq!(json["items"][0]["trays"], 10);
        assert_eq!(json["total_stacks"], 1);

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }
}
