//! Dispatch board read model.

use std::fmt;

use serde::Serialize;

use crate::catalog::LocationName;

use super::{DispatchStatus, LocationKind, RelaySession};

/// One trailer row on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardTrailer {
    pub trailer_id: String,
    pub stack_count: u32,
    pub capacity: u32,
    pub ld_number: Option<String>,
    pub trailer_number: Option<String>,
    pub seal_number: Option<String>,
    pub status: DispatchStatus,
}

/// A location and its trailers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardLocation {
    pub location: LocationName,
    pub kind: LocationKind,
    pub total_stacks: u32,
    pub spare_stacks: u32,
    pub trailers: Vec<BoardTrailer>,
}

/// Per-location trailer status for a whole session, with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchBoard {
    pub date: String,
    pub day: Option<u8>,
    pub locations: Vec<BoardLocation>,
    pub total_trailers: usize,
    pub total_stacks: u32,
    pub dispatched: usize,
}

impl DispatchBoard {
    pub fn from_session(session: &RelaySession) -> Self {
        let locations: Vec<BoardLocation> = session
            .locations()
            .iter()
            .map(|location| BoardLocation {
                location: location.name().clone(),
                kind: location.kind(),
                total_stacks: location.total_stacks(),
                spare_stacks: session.spare_stacks(location.name()).unwrap_or(0),
                trailers: session
                    .trailers_for(location.name())
                    .map(|trailer| BoardTrailer {
                        trailer_id: trailer.id().to_string(),
                        stack_count: trailer.stack_count(),
                        capacity: trailer.capacity(),
                        ld_number: trailer.ld_number().map(ToString::to_string),
                        trailer_number: trailer.trailer_number().map(str::to_string),
                        seal_number: trailer.seal_number().map(str::to_string),
                        status: trailer.dispatch_status(),
                    })
                    .collect(),
            })
            .collect();

        let rows = || locations.iter().flat_map(|location| location.trailers.iter());
        let total_trailers = rows().count();
        let total_stacks = rows().map(|trailer| trailer.stack_count).sum();
        let dispatched = rows()
            .filter(|trailer| trailer.status == DispatchStatus::Dispatched)
            .count();

        Self {
            date: session.date().to_string(),
            day: session.day().map(|day| day.as_u8()),
            locations,
            total_trailers,
            total_stacks,
            dispatched,
        }
    }
}

impl fmt::Display for DispatchBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day {
            Some(day) => writeln!(f, "Relay {} (day {})", self.date, day)?,
            None => writeln!(f, "Relay {}", self.date)?,
        }

        for location in &self.locations {
            writeln!(
                f,
                "\n{} [{}] {} stacks, {} spare",
                location.location,
                location.kind.as_str(),
                location.total_stacks,
                location.spare_stacks
            )?;
            for trailer in &location.trailers {
                writeln!(
                    f,
                    "  {:<20} {:>3}/{:<3} LD {:<10} trailer {:<10} seal {:<10} {}",
                    trailer.trailer_id,
                    trailer.stack_count,
                    trailer.capacity,
                    trailer.ld_number.as_deref().unwrap_or("-"),
                    trailer.trailer_number.as_deref().unwrap_or("-"),
                    trailer.seal_number.as_deref().unwrap_or("-"),
                    trailer.status
                )?;
            }
        }

        write!(
            f,
            "\n{} trailers, {} stacks, {} dispatched",
            self.total_trailers, self.total_stacks, self.dispatched
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Aggregate;
    use crate::relay::{DayNumber, LdNumber, StackInputs, TrailerId};
    use common::SessionId;

    fn session() -> RelaySession {
        let mut session = RelaySession::default();
        let anderson = LocationName::new("Anderson");
        let inputs = StackInputs {
            cross_dock_stacks: 150,
            ..Default::default()
        };
        let id = TrailerId::new("Anderson_1");

        let events = session
            .open(SessionId::new(), "12/25/2024", DayNumber::new(4).unwrap())
            .unwrap();
        session.apply_events(events);
        let events = session
            .aggregate(&anderson, LocationKind::Warehouse, &inputs)
            .unwrap();
        session.apply_events(events);
        let events = session.allocate(&anderson).unwrap();
        session.apply_events(events);
        let events = session.finalize(&id, LdNumber::new("4820193745")).unwrap();
        session.apply_events(events);
        let events = session
            .set_trailer_info(&id, Some("TRK-1"), Some("S-1"))
            .unwrap();
        session.apply_events(events);
        session
    }

    #[test]
    fn test_board_totals() {
        let board = DispatchBoard::from_session(&session());
        assert_eq!(board.total_trailers, 2);
        assert_eq!(board.total_stacks, 150);
        assert_eq!(board.dispatched, 1);
        assert_eq!(board.locations[0].trailers[1].status, DispatchStatus::Active);
    }

    #[test]
    fn test_board_display() {
        let text = DispatchBoard::from_session(&session()).to_string();
        assert!(text.starts_with("Relay 12/25/2024 (day 4)"));
        assert!(text.contains("Anderson [warehouse] 150 stacks, 0 spare"));
        assert!(text.contains("4820193745"));
        assert!(text.ends_with("2 trailers, 150 stacks, 1 dispatched"));
    }
}
