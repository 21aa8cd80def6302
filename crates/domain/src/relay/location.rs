//! Locations and their stack demand.

use serde::{Deserialize, Serialize};

use crate::calculator;
use crate::catalog::{LocationName, TrayType};
use crate::error::ValidationError;

/// Largest raw count accepted for any single location input.
pub const MAX_INPUT_COUNT: i64 = 1_000_000;

/// What kind of site a location is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    SisterPlant,
    #[default]
    Warehouse,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::SisterPlant => "sister plant",
            LocationKind::Warehouse => "warehouse",
        }
    }
}

/// Raw, unchecked inputs for a location as an operator enters them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StackInputs {
    pub bread_trays: i64,
    pub bulk_trays: i64,
    /// Already counted in stacks.
    pub cross_dock_stacks: i64,
    pub inbound_trays: i64,
    pub cake_pallets: i64,
}

impl StackInputs {
    /// Checks every count and converts the inputs for storage.
    pub fn validate(&self, location: &LocationName) -> Result<LocationCounts, ValidationError> {
        let check = |field: &'static str, value: i64| -> Result<u32, ValidationError> {
            if value < 0 {
                return Err(ValidationError::NegativeCount {
                    location: location.clone(),
                    field,
                    value,
                });
            }
            if value > MAX_INPUT_COUNT {
                return Err(ValidationError::CountTooLarge {
                    location: location.clone(),
                    field,
                    value,
                    limit: MAX_INPUT_COUNT,
                });
            }
            // bounded by MAX_INPUT_COUNT above
            Ok(value as u32)
        };

        Ok(LocationCounts {
            bread_trays: check("bread_trays", self.bread_trays)?,
            bulk_trays: check("bulk_trays", self.bulk_trays)?,
            cross_dock_stacks: check("cross_dock_stacks", self.cross_dock_stacks)?,
            inbound_trays: check("inbound_trays", self.inbound_trays)?,
            cake_pallets: check("cake_pallets", self.cake_pallets)?,
        })
    }
}

/// Validated input counts stored on a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationCounts {
    pub bread_trays: u32,
    pub bulk_trays: u32,
    pub cross_dock_stacks: u32,
    pub inbound_trays: u32,
    pub cake_pallets: u32,
}

impl LocationCounts {
    /// Total stack demand of these inputs.
    pub fn total_stacks(&self) -> u32 {
        calculator::stacks_from_raw(TrayType::Bread, self.bread_trays)
            + calculator::stacks_from_raw(TrayType::Bulk, self.bulk_trays)
            + self.cross_dock_stacks
            + calculator::inbound_stacks(self.inbound_trays)
            + calculator::cake_pallet_stacks(self.cake_pallets)
    }
}

/// A location taking part in a relay, with its aggregated demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub(super) name: LocationName,
    #[serde(default)]
    pub(super) kind: LocationKind,
    #[serde(flatten)]
    pub(super) counts: LocationCounts,
    pub(super) total_stacks: u32,
}

impl Location {
    pub(super) fn new(name: LocationName, kind: LocationKind, counts: LocationCounts) -> Self {
        Self {
            name,
            kind,
            total_stacks: counts.total_stacks(),
            counts,
        }
    }

    pub fn name(&self) -> &LocationName {
        &self.name
    }

    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    pub fn counts(&self) -> &LocationCounts {
        &self.counts
    }

    /// Total stack demand across all inputs.
    pub fn total_stacks(&self) -> u32 {
        self.total_stacks
    }
}
