//! Relay session domain events.

use chrono::{DateTime, Utc};
use common::SessionId;
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;
use crate::catalog::LocationName;

use super::{DayNumber, LdNumber, LocationCounts, LocationKind, TrailerId};

/// Events that can occur on a relay session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RelayEvent {
    /// Session was opened for a relay date.
    SessionOpened(SessionOpenedData),

    /// Location inputs were recorded (replacing earlier ones).
    LocationAggregated(LocationAggregatedData),

    /// Trailers were created for a location.
    TrailersAllocated(TrailersAllocatedData),

    /// A trailer's stack count was set by hand.
    StackCountEdited(StackCountEditedData),

    /// Spare stacks were moved onto a trailer.
    OverloadAdded(OverloadAddedData),

    /// Trailer received its LD number.
    TrailerFinalized(TrailerFinalizedData),

    /// Trailer and seal numbers were entered.
    TrailerInfoSet(TrailerInfoSetData),
}

impl DomainEvent for RelayEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RelayEvent::SessionOpened(_) => "SessionOpened",
            RelayEvent::LocationAggregated(_) => "LocationAggregated",
            RelayEvent::TrailersAllocated(_) => "TrailersAllocated",
            RelayEvent::StackCountEdited(_) => "StackCountEdited",
            RelayEvent::OverloadAdded(_) => "OverloadAdded",
            RelayEvent::TrailerFinalized(_) => "TrailerFinalized",
            RelayEvent::TrailerInfoSet(_) => "TrailerInfoSet",
        }
    }
}

/// Data for SessionOpened event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOpenedData {
    pub session_id: SessionId,

    /// Relay date label, `MM/DD/YYYY`.
    pub date: String,

    pub day: DayNumber,

    pub opened_at: DateTime<Utc>,
}

/// Data for LocationAggregated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAggregatedData {
    pub location: LocationName,
    pub kind: LocationKind,
    pub counts: LocationCounts,

    /// Demand computed from `counts`.
    pub total_stacks: u32,
}

/// One trailer created by an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedTrailer {
    pub trailer_id: TrailerId,
    pub stack_count: u32,
}

/// Data for TrailersAllocated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailersAllocatedData {
    pub location: LocationName,

    /// Trailers in sequence order, all but the last full.
    pub trailers: Vec<AllocatedTrailer>,

    pub allocated_at: DateTime<Utc>,
}

/// Data for StackCountEdited event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackCountEditedData {
    pub trailer_id: TrailerId,
    pub old_count: u32,
    pub new_count: u32,
}

/// Data for OverloadAdded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadAddedData {
    pub source: LocationName,
    pub destination: TrailerId,
    pub stacks: u32,
    pub added_at: DateTime<Utc>,
}

/// Data for TrailerFinalized event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailerFinalizedData {
    pub trailer_id: TrailerId,
    pub ld_number: LdNumber,
    pub finalized_at: DateTime<Utc>,
}

/// Data for TrailerInfoSet event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailerInfoSetData {
    pub trailer_id: TrailerId,
    pub trailer_number: Option<String>,
    pub seal_number: Option<String>,
}

// Convenience constructors for events
impl RelayEvent {
    pub fn session_opened(session_id: SessionId, date: impl Into<String>, day: DayNumber) -> Self {
        RelayEvent::SessionOpened(SessionOpenedData {
            session_id,
            date: date.into(),
            day,
            opened_at: Utc::now(),
        })
    }

    pub fn location_aggregated(
        location: LocationName,
        kind: LocationKind,
        counts: LocationCounts,
    ) -> Self {
        RelayEvent::LocationAggregated(LocationAggregatedData {
            location,
            kind,
            total_stacks: counts.total_stacks(),
            counts,
        })
    }

    pub fn trailers_allocated(location: LocationName, trailers: Vec<AllocatedTrailer>) -> Self {
        RelayEvent::TrailersAllocated(TrailersAllocatedData {
            location,
            trailers,
            allocated_at: Utc::now(),
        })
    }

    pub fn stack_count_edited(trailer_id: TrailerId, old_count: u32, new_count: u32) -> Self {
        RelayEvent::StackCountEdited(StackCountEditedData {
            trailer_id,
            old_count,
            new_count,
        })
    }

    pub fn overload_added(source: LocationName, destination: TrailerId, stacks: u32) -> Self {
        RelayEvent::OverloadAdded(OverloadAddedData {
            source,
            destination,
            stacks,
            added_at: Utc::now(),
        })
    }

    pub fn trailer_finalized(trailer_id: TrailerId, ld_number: LdNumber) -> Self {
        RelayEvent::TrailerFinalized(TrailerFinalizedData {
            trailer_id,
            ld_number,
            finalized_at: Utc::now(),
        })
    }

    pub fn trailer_info_set(
        trailer_id: TrailerId,
        trailer_number: Option<String>,
        seal_number: Option<String>,
    ) -> Self {
        RelayEvent::TrailerInfoSet(TrailerInfoSetData {
            trailer_id,
            trailer_number,
            seal_number,
        })
    }
}
