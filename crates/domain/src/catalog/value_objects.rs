//! Identifiers and small value types for the catalog.

use serde::{Deserialize, Serialize};

use common::{BREAD_TRAYS_PER_STACK, BULK_TRAYS_PER_STACK};

/// Product number as printed on the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product ID from its catalog number.
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the catalog number.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

/// Delivery route number (e.g. 6278).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(u32);

impl RouteId {
    /// Creates a route ID from its route number.
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the route number.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RouteId {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

/// Name of a warehouse or sister plant (e.g. "Villa Rica").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationName(String);

impl LocationName {
    /// Creates a location name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LocationName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LocationName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for LocationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kind of tray a product ships on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrayType {
    Bread,
    Bulk,
}

impl TrayType {
    /// Trays of this type that make up one stack when counting raw trays.
    pub fn trays_per_stack(&self) -> u32 {
        match self {
            TrayType::Bread => BREAD_TRAYS_PER_STACK,
            TrayType::Bulk => BULK_TRAYS_PER_STACK,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrayType::Bread => "bread",
            TrayType::Bulk => "bulk",
        }
    }
}

impl std::fmt::Display for TrayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
