//! Unit, tray and stack arithmetic.
//!
//! Partial stacks are never represented: any remainder rounds up to a full
//! stack.

use common::{CAKE_PALLET_STACKS, INBOUND_TRAYS_PER_STACK};

use crate::catalog::{Product, TrayType};
use crate::error::ValidationError;

/// Converts ordered units into trays.
///
/// `units` must be a positive multiple of the product's units-per-tray.
pub fn trays_for(product: &Product, units: u32) -> Result<u32, ValidationError> {
    if units == 0 {
        return Err(ValidationError::NonPositiveUnits {
            product_id: product.id(),
        });
    }
    if units % product.units_per_tray() != 0 {
        return Err(ValidationError::UnitsNotMultiple {
            product_id: product.id(),
            units,
            units_per_tray: product.units_per_tray(),
        });
    }

    Ok(units / product.units_per_tray())
}

/// Stacks needed for `trays` of a product, using its own stack height.
pub fn stacks_for(product: &Product, trays: u32) -> u32 {
    trays.div_ceil(product.stack_height())
}

/// Stacks needed for raw tray counts of a tray type (17 bread, 30 bulk).
pub fn stacks_from_raw(tray_type: TrayType, tray_count: u32) -> u32 {
    tray_count.div_ceil(tray_type.trays_per_stack())
}

/// Stacks needed for trays arriving from other plants.
pub fn inbound_stacks(inbound_trays: u32) -> u32 {
    inbound_trays.div_ceil(INBOUND_TRAYS_PER_STACK)
}

/// Capacity charged for cake pallets: four stack-equivalents each.
pub fn cake_pallet_stacks(pallet_count: u32) -> u32 {
    pallet_count * CAKE_PALLET_STACKS
}
