//! Value objects for relay sessions.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::LocationName;
use crate::error::ValidationError;

/// Operating day of a relay, 1 through 6.
///
/// Deployments usually allow only a subset (e.g. no day 3); that narrower
/// check belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayNumber(u8);

impl DayNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(day: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&day) {
            Ok(Self(day))
        } else {
            Err(ValidationError::InvalidDay(day))
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DayNumber {
    type Error = ValidationError;

    fn try_from(day: u8) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

impl From<DayNumber> for u8 {
    fn from(day: DayNumber) -> Self {
        day.0
    }
}

impl std::fmt::Display for DayNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trailer identifier scoped to its location, e.g. `Anderson_2`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrailerId(String);

impl TrailerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `sequence`-th trailer of a location, counting from 1.
    pub fn for_location(location: &LocationName, sequence: usize) -> Self {
        Self(format!("{location}_{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrailerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrailerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TrailerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Ten-digit load number assigned when a trailer is finalized.
///
/// Load numbers are drawn at random and are advisory: nothing guarantees
/// uniqueness unless the session enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LdNumber(String);

impl LdNumber {
    const LOWEST: u64 = 1_000_000_000;
    const HIGHEST: u64 = 9_999_999_999;

    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Draws a random ten-digit number with no leading zero.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(Self::LOWEST..=Self::HIGHEST).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for exactly ten ASCII digits.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 10 && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl std::fmt::Display for LdNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
