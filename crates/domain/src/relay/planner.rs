//! Turns confirmed orders into per-location relay inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, LocationName, TrayType};
use crate::error::NotFoundError;
use crate::order::Order;

use super::{LocationKind, StackInputs};

/// Aggregator inputs for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDemand {
    pub location: LocationName,
    pub kind: LocationKind,
    pub inputs: StackInputs,
}

/// Sums ordered trays per location.
///
/// Trays of products baked at `home_plant` count as bread or bulk by tray
/// type; everything else arrives on inbound trailers and counts as inbound
/// trays. Cross-dock stacks and cake pallets are not ordered per route and
/// stay zero. Locations come out sorted by name.
pub fn demand_from_orders(
    catalog: &Catalog,
    orders: &[Order],
    home_plant: u32,
) -> Result<Vec<LocationDemand>, NotFoundError> {
    let mut by_location: BTreeMap<&LocationName, StackInputs> = BTreeMap::new();

    for order in orders {
        let inputs = by_location.entry(order.location()).or_default();
        for item in order.items() {
            let product = catalog.product(item.product_id())?;
            let trays = i64::from(item.trays());
            if product.origin_plant() != home_plant {
                inputs.inbound_trays += trays;
            } else {
                match product.tray_type() {
                    TrayType::Bread => inputs.bread_trays += trays,
                    TrayType::Bulk => inputs.bulk_trays += trays,
                }
            }
        }
    }

    Ok(by_location
        .into_iter()
        .map(|(location, inputs)| LocationDemand {
            location: location.clone(),
            kind: catalog.location_kind(location),
            inputs,
        })
        .collect())
}
