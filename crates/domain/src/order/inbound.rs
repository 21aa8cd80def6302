//! Products that have to be brought in from other plants.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{Catalog, ProductId};
use crate::error::NotFoundError;

use super::Order;

/// Ordered totals of one foreign-plant product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboundProduct {
    pub product_id: ProductId,
    pub product_name: String,
    pub origin_plant: u32,
    pub total_units: u64,
    pub total_trays: u64,
    pub total_stacks: u64,
}

/// Groups every ordered product not baked at `home_plant` by origin plant.
///
/// Products within a plant are sorted by product id. An empty map means
/// nothing needs an inbound trailer.
pub fn inbound_analysis(
    catalog: &Catalog,
    orders: &[Order],
    home_plant: u32,
) -> Result<BTreeMap<u32, Vec<InboundProduct>>, NotFoundError> {
    let mut by_plant: BTreeMap<u32, BTreeMap<ProductId, InboundProduct>> = BTreeMap::new();

    for item in orders.iter().flat_map(|order| order.items()) {
        let product = catalog.product(item.product_id())?;
        if product.origin_plant() == home_plant {
            continue;
        }

        let entry = by_plant
            .entry(product.origin_plant())
            .or_default()
            .entry(product.id())
            .or_insert_with(|| InboundProduct {
                product_id: product.id(),
                product_name: product.name().to_string(),
                origin_plant: product.origin_plant(),
                total_units: 0,
                total_trays: 0,
                total_stacks: 0,
            });
        entry.total_units += u64::from(item.units());
        entry.total_trays += u64::from(item.trays());
        entry.total_stacks += u64::from(item.stacks());
    }

    Ok(by_plant
        .into_iter()
        .map(|(plant, products)| (plant, products.into_values().collect()))
        .collect())
}
