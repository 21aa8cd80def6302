//! Demo order generation.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::index;

use crate::catalog::{Catalog, LocationName, Route};
use crate::error::{DomainError, ValidationError};

use super::{ItemRequest, Order, OrderBuilder};

/// Trays drawn per simulated line unless a location overrides it.
pub const DEFAULT_TRAY_RANGE: RangeInclusive<u32> = 1..=20;

/// Generates pseudo-random orders for demos and load tests.
///
/// Every line orders a whole number of trays, so units are always a
/// multiple of the product's units-per-tray. Randomness comes from the
/// caller so tests can pass a seeded generator.
#[derive(Debug, Clone)]
pub struct OrderSimulator<'a> {
    catalog: &'a Catalog,
    tray_range: RangeInclusive<u32>,
    location_ranges: HashMap<LocationName, RangeInclusive<u32>>,
}

impl<'a> OrderSimulator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            tray_range: DEFAULT_TRAY_RANGE,
            location_ranges: HashMap::new(),
        }
    }

    /// Sets the tray range drawn for each line.
    pub fn with_tray_range(mut self, range: RangeInclusive<u32>) -> Result<Self, ValidationError> {
        check_range(&range)?;
        self.tray_range = range;
        Ok(self)
    }

    /// Uses a different tray range for one location, e.g. to force a
    /// multi-trailer demand there.
    pub fn with_location_range(
        mut self,
        location: impl Into<LocationName>,
        range: RangeInclusive<u32>,
    ) -> Result<Self, ValidationError> {
        check_range(&range)?;
        self.location_ranges.insert(location.into(), range);
        Ok(self)
    }

    /// Produces one order per route with between 1 and
    /// `max_items_per_order` distinct products.
    pub fn simulate_orders<R: Rng + ?Sized>(
        &self,
        routes: &[Route],
        max_items_per_order: usize,
        date: &str,
        rng: &mut R,
    ) -> Result<Vec<Order>, DomainError> {
        if max_items_per_order == 0 {
            return Err(ValidationError::InvalidItemLimit.into());
        }

        let products = self.catalog.products();
        if products.is_empty() {
            tracing::warn!("catalog has no products, no orders simulated");
            return Ok(Vec::new());
        }

        let builder = OrderBuilder::new(self.catalog);
        let item_limit = max_items_per_order.min(products.len());
        let mut orders = Vec::with_capacity(routes.len());

        for route in routes {
            let range = self
                .location_ranges
                .get(&route.location)
                .unwrap_or(&self.tray_range);
            let line_count = rng.random_range(1..=item_limit);

            let items: Vec<ItemRequest> = index::sample(rng, products.len(), line_count)
                .into_iter()
                .map(|position| {
                    let product = &products[position];
                    let trays = rng.random_range(range.clone());
                    ItemRequest::new(product.id(), trays * product.units_per_tray())
                })
                .collect();

            orders.push(builder.create_order(route.route_id, &route.location, date, &items)?);
        }

        tracing::info!(orders = orders.len(), date, "simulated orders");
        Ok(orders)
    }
}

fn check_range(range: &RangeInclusive<u32>) -> Result<(), ValidationError> {
    if *range.start() == 0 || range.is_empty() {
        return Err(ValidationError::InvalidTrayRange {
            start: *range.start(),
            end: *range.end(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::catalog::{CatalogDocument, Product, TrayType};

    fn catalog() -> Catalog {
        Catalog::from_document(CatalogDocument {
            products: vec![
                Product::new(4021, "Butter Bread", 12, TrayType::Bread, 17, 191).unwrap(),
                Product::new(5110, "Hamburger Buns", 8, TrayType::Bulk, 30, 191).unwrap(),
                Product::new(6001, "Honey Wheat", 10, TrayType::Bread, 20, 204).unwrap(),
            ],
            routes: vec![
                Route::new(6278, "Anderson"),
                Route::new(5539, "Galax"),
                Route::new(6280, "Anderson"),
            ],
            sister_plants: vec![],
        })
        .unwrap()
    }

    #[test]
    fn test_one_valid_order_per_route() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let orders = OrderSimulator::new(&catalog)
            .simulate_orders(catalog.routes(), 2, "12/25/2024", &mut rng)
            .unwrap();

        assert_eq!(orders.len(), 3);
        for (order, route) in orders.iter().zip(catalog.routes()) {
            assert_eq!(order.route_id(), route.route_id);
            assert!(!order.items().is_empty() && order.items().len() <= 2);

            let distinct: HashSet<_> = order.items().iter().map(|i| i.product_id()).collect();
            assert_eq!(distinct.len(), order.items().len());

            for item in order.items() {
                let product = catalog.product(item.product_id()).unwrap();
                assert_eq!(item.units() % product.units_per_tray(), 0);
                assert!(DEFAULT_TRAY_RANGE.contains(&item.trays()));
            }
        }
    }

    #[test]
    fn test_location_range_override() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let orders = OrderSimulator::new(&catalog)
            .with_location_range("Anderson", 100..=200)
            .unwrap()
            .simulate_orders(catalog.routes(), 3, "12/25/2024", &mut rng)
            .unwrap();

        for order in orders {
            let expected = if order.location().as_str() == "Anderson" {
                100..=200
            } else {
                DEFAULT_TRAY_RANGE
            };
            assert!(order.items().iter().all(|i| expected.contains(&i.trays())));
        }
    }

    #[test]
    fn test_item_limit_above_catalog_size_is_capped() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let orders = OrderSimulator::new(&catalog)
            .simulate_orders(catalog.routes(), 50, "12/25/2024", &mut rng)
            .unwrap();
        assert!(orders.iter().all(|o| o.items().len() <= 3));
    }

    #[test]
    fn test_zero_item_limit_rejected() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let result =
            OrderSimulator::new(&catalog).simulate_orders(catalog.routes(), 0, "12/25/2024", &mut rng);
        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::InvalidItemLimit))
        ));
    }

    #[test]
    fn test_zero_tray_range_rejected() {
        let catalog = catalog();
        assert!(matches!(
            OrderSimulator::new(&catalog).with_tray_range(0..=5),
            Err(ValidationError::InvalidTrayRange { start: 0, end: 5 })
        ));
    }
}
