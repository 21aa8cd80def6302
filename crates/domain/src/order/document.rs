//! Confirmed orders file written after a simulation run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::relay::DayNumber;

use super::Order;

/// Orders for one relay date and day, with confirmation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersDocument {
    pub orders: Vec<Order>,
    pub metadata: OrdersMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersMetadata {
    pub total_orders: usize,
    /// `MM/DD/YYYY` label the orders were confirmed for.
    pub confirmed_date: String,
    pub confirmed_day: DayNumber,
    pub generation_timestamp: DateTime<Utc>,
}

impl OrdersDocument {
    pub fn new(orders: Vec<Order>, confirmed_date: impl Into<String>, day: DayNumber) -> Self {
        let metadata = OrdersMetadata {
            total_orders: orders.len(),
            confirmed_date: confirmed_date.into(),
            confirmed_day: day,
            generation_timestamp: Utc::now(),
        };
        Self { orders, metadata }
    }

    /// File name used for the confirmed orders, e.g. `orders_12-25-2024_Day4.json`.
    pub fn file_name(&self) -> String {
        format!(
            "orders_{}_Day{}.json",
            self.metadata.confirmed_date.replace('/', "-"),
            self.metadata.confirmed_day
        )
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }
}
