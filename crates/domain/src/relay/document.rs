//! Persisted shape of a relay session.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use common::{SessionId, TRAILER_CAPACITY, Version};
use serde::{Deserialize, Serialize};

use crate::catalog::LocationName;
use crate::error::{DomainError, NotFoundError, StateError, ValidationError};

use super::{DayNumber, FinalizeState, LdNumber, Location, Overload, RelaySession, Trailer, TrailerId};

/// The relay session JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayDocument {
    pub date: String,
    pub day: DayNumber,
    pub locations: Vec<Location>,
    pub trailers: Vec<TrailerRecord>,
}

/// Serialized shape of a trailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerRecord {
    pub id: TrailerId,
    pub location: LocationName,
    pub stack_count: u32,
    pub capacity: u32,
    pub finalized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ld_number: Option<LdNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seal_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalized_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub overloads: Vec<OverloadRecord>,
}

/// Serialized shape of an overload; the destination is the owning trailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverloadRecord {
    pub source: LocationName,
    pub stacks: u32,
}

impl RelayDocument {
    /// Captures an opened session.
    pub fn from_session(session: &RelaySession) -> Result<Self, DomainError> {
        let day = session.day.ok_or(StateError::SessionNotOpened)?;

        Ok(Self {
            date: session.date.clone(),
            day,
            locations: session.locations.clone(),
            trailers: session.trailers.iter().map(TrailerRecord::from).collect(),
        })
    }

    /// Rebuilds a session, checking every invariant the engine relies on.
    ///
    /// The session gets a fresh id and starts a new journal at version 0.
    pub fn into_session(self) -> Result<RelaySession, DomainError> {
        let mut totals = HashMap::with_capacity(self.locations.len());
        for location in &self.locations {
            if totals
                .insert(location.name.clone(), location.total_stacks)
                .is_some()
            {
                return Err(ValidationError::DuplicateId {
                    kind: "location",
                    id: location.name.to_string(),
                }
                .into());
            }
            let computed = location.counts.total_stacks();
            if computed != location.total_stacks {
                return Err(ValidationError::TotalMismatch {
                    location: location.name.clone(),
                    declared: location.total_stacks,
                    computed,
                }
                .into());
            }
        }

        let mut ids = HashSet::with_capacity(self.trailers.len());
        let mut trailers = Vec::with_capacity(self.trailers.len());
        for record in self.trailers {
            if !ids.insert(record.id.clone()) {
                return Err(ValidationError::DuplicateId {
                    kind: "trailer",
                    id: record.id.to_string(),
                }
                .into());
            }
            trailers.push(record.into_trailer(&totals)?);
        }

        let mut sent: HashMap<&LocationName, u64> = HashMap::new();
        for overload in trailers.iter().flat_map(|trailer| trailer.overloads.iter()) {
            *sent.entry(&overload.source).or_default() += u64::from(overload.stacks);
        }
        for (location, sent) in sent {
            let total = totals.get(location).copied().unwrap_or_default();
            if sent > u64::from(total) {
                return Err(ValidationError::OversentStacks {
                    location: location.clone(),
                    sent,
                    total,
                }
                .into());
            }
        }

        Ok(RelaySession {
            id: Some(SessionId::new()),
            version: Version::initial(),
            date: self.date,
            day: Some(self.day),
            locations: self.locations,
            trailers,
        })
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Trailer> for TrailerRecord {
    fn from(trailer: &Trailer) -> Self {
        Self {
            id: trailer.id.clone(),
            location: trailer.location.clone(),
            stack_count: trailer.stack_count,
            capacity: TRAILER_CAPACITY,
            finalized: trailer.state.is_terminal(),
            ld_number: trailer.ld_number.clone(),
            trailer_number: trailer.trailer_number.clone(),
            seal_number: trailer.seal_number.clone(),
            finalized_at: trailer.finalized_at,
            overloads: trailer
                .overloads
                .iter()
                .map(|overload| OverloadRecord {
                    source: overload.source.clone(),
                    stacks: overload.stacks,
                })
                .collect(),
        }
    }
}

impl TrailerRecord {
    fn into_trailer(self, locations: &HashMap<LocationName, u32>) -> Result<Trailer, DomainError> {
        if self.capacity != TRAILER_CAPACITY {
            return Err(ValidationError::CapacityMismatch {
                trailer_id: self.id,
                declared: self.capacity,
                expected: TRAILER_CAPACITY,
            }
            .into());
        }
        if self.stack_count > TRAILER_CAPACITY {
            return Err(ValidationError::CapacityExceeded {
                trailer_id: self.id,
                requested: i64::from(self.stack_count),
                capacity: TRAILER_CAPACITY,
            }
            .into());
        }
        if !locations.contains_key(&self.location) {
            return Err(NotFoundError::Location(self.location).into());
        }
        if let Some(unknown) = self
            .overloads
            .iter()
            .find(|overload| !locations.contains_key(&overload.source))
        {
            return Err(NotFoundError::Location(unknown.source.clone()).into());
        }
        let received: u64 = self
            .overloads
            .iter()
            .map(|overload| u64::from(overload.stacks))
            .sum();
        if received > u64::from(self.stack_count) {
            return Err(ValidationError::OverloadExceedsLoad {
                trailer_id: self.id,
                received,
                stack_count: self.stack_count,
            }
            .into());
        }
        match &self.ld_number {
            None if self.finalized => {
                return Err(ValidationError::MissingLdNumber {
                    trailer_id: self.id,
                }
                .into());
            }
            Some(ld_number) if !ld_number.is_well_formed() => {
                return Err(ValidationError::InvalidLdNumber {
                    value: ld_number.to_string(),
                    trailer_id: self.id,
                }
                .into());
            }
            _ => {}
        }

        let state = if self.finalized {
            FinalizeState::Finalized
        } else {
            FinalizeState::Open
        };
        let overloads = self
            .overloads
            .into_iter()
            .map(|overload| Overload {
                source: overload.source,
                destination: self.id.clone(),
                stacks: overload.stacks,
            })
            .collect();

        Ok(Trailer {
            id: self.id,
            location: self.location,
            stack_count: self.stack_count,
            overloads,
            state,
            ld_number: self.ld_number,
            trailer_number: self.trailer_number,
            seal_number: self.seal_number,
            finalized_at: self.finalized_at,
        })
    }
}
