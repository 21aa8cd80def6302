//! Relay service providing a simplified API over a session.

use common::{SessionId, Version};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::aggregate::{Aggregate, DomainEvent};
use crate::catalog::LocationName;
use crate::error::{DomainError, StateError};

use super::{
    DayNumber, LdNumber, LocationDemand, LocationKind, RelayEvent, RelaySession, StackInputs,
    TrailerId,
};

/// Draws allowed per finalization when LD numbers must be unique.
pub const MAX_LD_ATTEMPTS: usize = 16;

/// Result of command execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// The events that were generated and applied.
    pub events: Vec<RelayEvent>,

    /// The session version after the command.
    pub new_version: Version,
}

/// One applied event in the session journal.
#[derive(Debug, Clone, Serialize)]
pub struct JournalEntry {
    pub version: Version,
    pub event_type: &'static str,
    pub event: RelayEvent,
}

/// Service for running a relay session.
///
/// Wraps the session aggregate: every command is checked against the
/// current state, its events are applied and appended to the journal, and
/// rejected commands leave the session untouched. Randomness for LD numbers
/// comes from the injected generator.
pub struct RelayService<R = StdRng> {
    session: RelaySession,
    journal: Vec<JournalEntry>,
    rng: R,
    unique_ld_numbers: bool,
}

impl RelayService<StdRng> {
    /// Opens a new session seeded from the operating system.
    pub fn open(date: impl Into<String>, day: DayNumber) -> Result<Self, DomainError> {
        Self::open_with_rng(date, day, StdRng::from_os_rng())
    }
}

impl<R: Rng> RelayService<R> {
    /// Opens a new session drawing LD numbers from `rng`.
    pub fn open_with_rng(
        date: impl Into<String>,
        day: DayNumber,
        rng: R,
    ) -> Result<Self, DomainError> {
        let mut service = Self::from_session(RelaySession::default(), rng);
        let session_id = SessionId::new();
        let date = date.into();
        service.execute("open", |session| session.open(session_id, date, day))?;

        tracing::info!(%session_id, date = service.session.date(), %day, "relay session opened");
        Ok(service)
    }

    /// Continues an existing session, e.g. one loaded from its document.
    pub fn from_session(session: RelaySession, rng: R) -> Self {
        Self {
            session,
            journal: Vec::new(),
            rng,
            unique_ld_numbers: false,
        }
    }

    /// Re-draws LD numbers that are already used in the session.
    pub fn with_unique_ld_numbers(mut self) -> Self {
        self.unique_ld_numbers = true;
        self
    }

    pub fn session(&self) -> &RelaySession {
        &self.session
    }

    /// Events applied through this service, oldest first.
    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    pub fn into_session(self) -> RelaySession {
        self.session
    }

    /// Records a location's inputs.
    #[tracing::instrument(skip_all, fields(location = %location))]
    pub fn aggregate(
        &mut self,
        location: &LocationName,
        kind: LocationKind,
        inputs: &StackInputs,
    ) -> Result<CommandResult, DomainError> {
        self.execute("aggregate", |session| {
            session.aggregate(location, kind, inputs)
        })
    }

    /// Creates trailers for a location.
    #[tracing::instrument(skip_all, fields(location = %location))]
    pub fn allocate(&mut self, location: &LocationName) -> Result<CommandResult, DomainError> {
        let result = self.execute("allocate", |session| session.allocate(location))?;

        let created = self.session.trailers_for(location).count();
        if created > 0 {
            metrics::counter!("relay_trailers_allocated").increment(created as u64);
            tracing::info!(trailers = created, "location allocated");
            for trailer in self.session.trailers_for(location) {
                tracing::debug!(trailer = %trailer.id(), stacks = trailer.stack_count(), "trailer loaded");
            }
        }

        Ok(result)
    }

    /// Aggregates and allocates every location of a demand plan.
    ///
    /// Stops at the first rejected location; locations before it stay
    /// applied.
    pub fn plan(&mut self, demand: &[LocationDemand]) -> Result<Vec<TrailerId>, DomainError> {
        let mut created = Vec::new();
        for entry in demand {
            self.aggregate(&entry.location, entry.kind, &entry.inputs)?;
            self.allocate(&entry.location)?;
            created.extend(
                self.session
                    .trailers_for(&entry.location)
                    .map(|trailer| trailer.id().clone()),
            );
        }
        Ok(created)
    }

    /// Sets a trailer's stack count by hand.
    #[tracing::instrument(skip_all, fields(trailer = %trailer_id))]
    pub fn edit_stack_count(
        &mut self,
        trailer_id: &TrailerId,
        new_count: i64,
    ) -> Result<CommandResult, DomainError> {
        self.execute("edit_stack_count", |session| {
            session.edit_stack_count(trailer_id, new_count)
        })
    }

    /// Moves spare stacks from a location onto a trailer.
    #[tracing::instrument(skip_all, fields(source = %source, trailer = %destination))]
    pub fn add_overload(
        &mut self,
        source: &LocationName,
        destination: &TrailerId,
        stacks: u32,
    ) -> Result<CommandResult, DomainError> {
        let result = self.execute("add_overload", |session| {
            session.add_overload(source, destination, stacks)
        })?;

        metrics::counter!("relay_overloads_total").increment(1);
        tracing::info!(stacks, "overload added");
        Ok(result)
    }

    /// Finalizes a trailer and returns its new LD number.
    #[tracing::instrument(skip_all, fields(trailer = %trailer_id))]
    pub fn finalize(&mut self, trailer_id: &TrailerId) -> Result<LdNumber, DomainError> {
        let ld_number = match self.draw_ld_number() {
            Ok(ld_number) => ld_number,
            Err(e) => return Err(self.reject("finalize", e.into())),
        };

        self.execute("finalize", |session| {
            session.finalize(trailer_id, ld_number.clone())
        })?;

        metrics::counter!("relay_trailers_finalized").increment(1);
        tracing::info!(ld_number = %ld_number, "trailer finalized");
        Ok(ld_number)
    }

    /// Records trailer and seal numbers.
    #[tracing::instrument(skip_all, fields(trailer = %trailer_id))]
    pub fn set_trailer_info(
        &mut self,
        trailer_id: &TrailerId,
        trailer_number: Option<&str>,
        seal_number: Option<&str>,
    ) -> Result<CommandResult, DomainError> {
        self.execute("set_trailer_info", |session| {
            session.set_trailer_info(trailer_id, trailer_number, seal_number)
        })
    }

    fn draw_ld_number(&mut self) -> Result<LdNumber, StateError> {
        if !self.unique_ld_numbers {
            return Ok(LdNumber::generate(&mut self.rng));
        }

        for _ in 0..MAX_LD_ATTEMPTS {
            let ld_number = LdNumber::generate(&mut self.rng);
            if !self.session.has_ld_number(&ld_number) {
                return Ok(ld_number);
            }
            tracing::debug!(%ld_number, "LD number already used, drawing again");
        }

        Err(StateError::DuplicateLdNumber {
            attempts: MAX_LD_ATTEMPTS,
        })
    }

    /// Runs a command against the session and applies its events.
    fn execute<F>(&mut self, command: &'static str, command_fn: F) -> Result<CommandResult, DomainError>
    where
        F: FnOnce(&RelaySession) -> Result<Vec<RelayEvent>, DomainError>,
    {
        let events = match command_fn(&self.session) {
            Ok(events) => events,
            Err(e) => return Err(self.reject(command, e)),
        };

        let mut version = self.session.version();
        for event in &events {
            version = version.next();
            self.journal.push(JournalEntry {
                version,
                event_type: event.event_type(),
                event: event.clone(),
            });
            self.session.apply(event.clone());
        }
        self.session.set_version(version);

        Ok(CommandResult {
            events,
            new_version: version,
        })
    }

    fn reject(&self, command: &'static str, error: DomainError) -> DomainError {
        metrics::counter!("relay_commands_rejected", "command" => command).increment(1);
        tracing::warn!(command, error = %error, "command rejected");
        error
    }
}
