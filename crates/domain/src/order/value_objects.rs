//! Value objects for the order domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator;
use crate::catalog::{Product, ProductId};
use crate::error::ValidationError;

/// Order identifier, e.g. `ORD_1f0c...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Creates an order ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh, unique order ID.
    pub fn generate() -> Self {
        Self(format!("ORD_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A requested line: a product and the units wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub product_id: ProductId,
    pub units: u32,
}

impl ItemRequest {
    pub fn new(product_id: impl Into<ProductId>, units: u32) -> Self {
        Self {
            product_id: product_id.into(),
            units,
        }
    }
}

/// A validated order line with its derived trays and stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product_id: ProductId,
    units: u32,
    trays: u32,
    stacks: u32,
}

impl OrderItem {
    /// Prices a line for `units` of `product`.
    ///
    /// Fails unless `units` is a positive multiple of the product's
    /// units-per-tray.
    pub fn for_product(product: &Product, units: u32) -> Result<Self, ValidationError> {
        let trays = calculator::trays_for(product, units)?;
        Ok(Self {
            product_id: product.id(),
            units,
            trays,
            stacks: calculator::stacks_for(product, trays),
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn trays(&self) -> u32 {
        self.trays
    }

    pub fn stacks(&self) -> u32 {
        self.stacks
    }
}
