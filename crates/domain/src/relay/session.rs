//! Relay session aggregate.

use common::{SessionId, TRAILER_CAPACITY, Version};

use crate::aggregate::Aggregate;
use crate::catalog::LocationName;
use crate::error::{DomainError, NotFoundError, StateError, ValidationError};

use super::{
    DayNumber, DispatchStatus, FinalizeState, LdNumber, Location, LocationKind, Overload,
    RelayEvent, StackInputs, Trailer, TrailerId,
    events::{
        AllocatedTrailer, LocationAggregatedData, OverloadAddedData, SessionOpenedData,
        StackCountEditedData, TrailerFinalizedData, TrailerInfoSetData, TrailersAllocatedData,
    },
};

/// All locations and trailers of one relay date.
///
/// Spare stacks are not stored. They are derived from location demand,
/// the stacks each location has on its own trailers and the overloads it
/// has sent.
#[derive(Debug, Clone, Default)]
pub struct RelaySession {
    pub(super) id: Option<SessionId>,
    pub(super) version: Version,
    pub(super) date: String,
    pub(super) day: Option<DayNumber>,
    pub(super) locations: Vec<Location>,
    pub(super) trailers: Vec<Trailer>,
}

impl Aggregate for RelaySession {
    type Event = RelayEvent;

    fn aggregate_type() -> &'static str {
        "RelaySession"
    }

    fn id(&self) -> Option<SessionId> {
        self.id
    }

    fn version(&self) -> Version {
        self.version
    }

    fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            RelayEvent::SessionOpened(data) => self.apply_session_opened(data),
            RelayEvent::LocationAggregated(data) => self.apply_location_aggregated(data),
            RelayEvent::TrailersAllocated(data) => self.apply_trailers_allocated(data),
            RelayEvent::StackCountEdited(data) => self.apply_stack_count_edited(data),
            RelayEvent::OverloadAdded(data) => self.apply_overload_added(data),
            RelayEvent::TrailerFinalized(data) => self.apply_trailer_finalized(data),
            RelayEvent::TrailerInfoSet(data) => self.apply_trailer_info_set(data),
        }
    }
}

// Query methods
impl RelaySession {
    /// Relay date label, `MM/DD/YYYY`.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn day(&self) -> Option<DayNumber> {
        self.day
    }

    pub fn is_opened(&self) -> bool {
        self.id.is_some()
    }

    /// Locations in the order they were first aggregated.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, name: &LocationName) -> Result<&Location, NotFoundError> {
        self.locations
            .iter()
            .find(|location| &location.name == name)
            .ok_or_else(|| NotFoundError::Location(name.clone()))
    }

    pub fn trailers(&self) -> &[Trailer] {
        &self.trailers
    }

    pub fn trailer(&self, id: &TrailerId) -> Result<&Trailer, NotFoundError> {
        self.trailers
            .iter()
            .find(|trailer| &trailer.id == id)
            .ok_or_else(|| NotFoundError::Trailer(id.clone()))
    }

    /// Trailers allocated for a location, in sequence order.
    pub fn trailers_for<'a>(
        &'a self,
        location: &'a LocationName,
    ) -> impl Iterator<Item = &'a Trailer> + 'a {
        self.trailers
            .iter()
            .filter(move |trailer| &trailer.location == location)
    }

    /// Stacks a location has moved onto other trailers through overloads.
    pub fn sent_stacks(&self, location: &LocationName) -> u32 {
        self.trailers
            .iter()
            .flat_map(|trailer| trailer.overloads.iter())
            .filter(|overload| &overload.source == location)
            .map(|overload| overload.stacks)
            .sum()
    }

    /// Stacks of a location's demand not yet on any trailer.
    pub fn spare_stacks(&self, location: &LocationName) -> Result<u32, NotFoundError> {
        let total = self.location(location)?.total_stacks;
        let own_loaded: u32 = self
            .trailers_for(location)
            .map(|trailer| trailer.stack_count.saturating_sub(trailer.received_stacks()))
            .sum();

        Ok(total
            .saturating_sub(own_loaded)
            .saturating_sub(self.sent_stacks(location)))
    }

    /// Returns true once a location's inputs can no longer change.
    pub fn is_locked(&self, location: &LocationName) -> bool {
        self.trailers_for(location).next().is_some() || self.sent_stacks(location) > 0
    }

    pub fn dispatch_status(&self, id: &TrailerId) -> Result<DispatchStatus, NotFoundError> {
        Ok(self.trailer(id)?.dispatch_status())
    }

    /// Returns true if any trailer already carries this LD number.
    pub fn has_ld_number(&self, ld_number: &LdNumber) -> bool {
        self.trailers
            .iter()
            .any(|trailer| trailer.ld_number.as_ref() == Some(ld_number))
    }

    fn ensure_opened(&self) -> Result<(), StateError> {
        if self.is_opened() {
            Ok(())
        } else {
            Err(StateError::SessionNotOpened)
        }
    }
}

// Command methods (return events)
impl RelaySession {
    /// Opens the session for a relay date and day.
    pub fn open(
        &self,
        session_id: SessionId,
        date: impl Into<String>,
        day: DayNumber,
    ) -> Result<Vec<RelayEvent>, DomainError> {
        if self.is_opened() {
            return Err(StateError::SessionAlreadyOpened.into());
        }

        Ok(vec![RelayEvent::session_opened(session_id, date, day)])
    }

    /// Records a location's inputs, replacing any earlier ones.
    ///
    /// Inputs are frozen once the location has trailers or has sent
    /// overloads.
    pub fn aggregate(
        &self,
        location: &LocationName,
        kind: LocationKind,
        inputs: &StackInputs,
    ) -> Result<Vec<RelayEvent>, DomainError> {
        self.ensure_opened()?;
        let counts = inputs.validate(location)?;

        if self.is_locked(location) {
            return Err(StateError::LocationLocked {
                location: location.clone(),
            }
            .into());
        }

        Ok(vec![RelayEvent::location_aggregated(
            location.clone(),
            kind,
            counts,
        )])
    }

    /// Packs a location's spare stacks onto the fewest trailers.
    ///
    /// Every trailer but the last is full; the last takes the remainder.
    /// No demand means no trailers and no events.
    pub fn allocate(&self, location: &LocationName) -> Result<Vec<RelayEvent>, DomainError> {
        self.ensure_opened()?;
        self.location(location)?;

        let existing = self.trailers_for(location).count();
        if existing > 0 {
            return Err(StateError::AlreadyAllocated {
                location: location.clone(),
                trailers: existing,
            }
            .into());
        }

        let stacks = self.spare_stacks(location)?;
        if stacks == 0 {
            return Ok(vec![]);
        }

        let count = stacks.div_ceil(TRAILER_CAPACITY);
        let trailers = (1..=count)
            .map(|sequence| {
                let stack_count = if sequence < count {
                    TRAILER_CAPACITY
                } else {
                    stacks - TRAILER_CAPACITY * (count - 1)
                };
                AllocatedTrailer {
                    trailer_id: TrailerId::for_location(location, sequence as usize),
                    stack_count,
                }
            })
            .collect();

        Ok(vec![RelayEvent::trailers_allocated(
            location.clone(),
            trailers,
        )])
    }

    /// Sets a trailer's stack count by hand.
    ///
    /// The count never drops below the stacks other locations moved onto the
    /// trailer; those belong to the overload, not to the owner's demand.
    pub fn edit_stack_count(
        &self,
        trailer_id: &TrailerId,
        new_count: i64,
    ) -> Result<Vec<RelayEvent>, DomainError> {
        self.ensure_opened()?;
        let trailer = self.trailer(trailer_id)?;

        if !trailer.state.can_edit_stacks() {
            return Err(ValidationError::TrailerFinalized {
                trailer_id: trailer_id.clone(),
            }
            .into());
        }
        if new_count < 0 {
            return Err(ValidationError::NegativeStackCount {
                trailer_id: trailer_id.clone(),
                value: new_count,
            }
            .into());
        }
        if new_count > i64::from(TRAILER_CAPACITY) {
            return Err(ValidationError::CapacityExceeded {
                trailer_id: trailer_id.clone(),
                requested: new_count,
                capacity: TRAILER_CAPACITY,
            }
            .into());
        }

        // bounded by TRAILER_CAPACITY above
        let new_count = new_count as u32;
        let received = trailer.received_stacks();
        if new_count < received {
            return Err(ValidationError::BelowReceived {
                trailer_id: trailer_id.clone(),
                requested: new_count,
                received,
            }
            .into());
        }
        if new_count == trailer.stack_count {
            return Ok(vec![]);
        }

        Ok(vec![RelayEvent::stack_count_edited(
            trailer_id.clone(),
            trailer.stack_count,
            new_count,
        )])
    }

    /// Moves spare stacks from `source` onto an open trailer.
    pub fn add_overload(
        &self,
        source: &LocationName,
        destination: &TrailerId,
        stacks: u32,
    ) -> Result<Vec<RelayEvent>, DomainError> {
        self.ensure_opened()?;
        let spare = self.spare_stacks(source)?;
        let trailer = self.trailer(destination)?;

        if !trailer.state.can_edit_stacks() {
            return Err(ValidationError::TrailerFinalized {
                trailer_id: destination.clone(),
            }
            .into());
        }
        if stacks == 0 {
            return Err(ValidationError::NonPositiveTransfer {
                location: source.clone(),
            }
            .into());
        }
        if stacks > spare {
            return Err(ValidationError::InsufficientSpare {
                location: source.clone(),
                requested: stacks,
                spare,
            }
            .into());
        }
        if stacks > trailer.remaining_capacity() {
            return Err(ValidationError::CapacityExceeded {
                trailer_id: destination.clone(),
                requested: i64::from(trailer.stack_count) + i64::from(stacks),
                capacity: TRAILER_CAPACITY,
            }
            .into());
        }

        Ok(vec![RelayEvent::overload_added(
            source.clone(),
            destination.clone(),
            stacks,
        )])
    }

    /// Assigns an LD number and freezes the trailer's stack count.
    pub fn finalize(
        &self,
        trailer_id: &TrailerId,
        ld_number: LdNumber,
    ) -> Result<Vec<RelayEvent>, DomainError> {
        self.ensure_opened()?;
        let trailer = self.trailer(trailer_id)?;

        if !trailer.state.can_finalize() {
            return Err(StateError::AlreadyFinalized {
                trailer_id: trailer_id.clone(),
            }
            .into());
        }

        Ok(vec![RelayEvent::trailer_finalized(
            trailer_id.clone(),
            ld_number,
        )])
    }

    /// Records the trailer (license plate) and seal numbers.
    ///
    /// Allowed before and after finalization. Blank values clear the field.
    pub fn set_trailer_info(
        &self,
        trailer_id: &TrailerId,
        trailer_number: Option<&str>,
        seal_number: Option<&str>,
    ) -> Result<Vec<RelayEvent>, DomainError> {
        self.ensure_opened()?;
        self.trailer(trailer_id)?;

        Ok(vec![RelayEvent::trailer_info_set(
            trailer_id.clone(),
            normalize(trailer_number),
            normalize(seal_number),
        )])
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

// Event application
impl RelaySession {
    fn trailer_mut(&mut self, id: &TrailerId) -> Option<&mut Trailer> {
        self.trailers.iter_mut().find(|trailer| &trailer.id == id)
    }

    fn apply_session_opened(&mut self, data: SessionOpenedData) {
        self.id = Some(data.session_id);
        self.date = data.date;
        self.day = Some(data.day);
    }

    fn apply_location_aggregated(&mut self, data: LocationAggregatedData) {
        let location = Location::new(data.location, data.kind, data.counts);
        match self
            .locations
            .iter_mut()
            .find(|existing| existing.name == location.name)
        {
            Some(existing) => *existing = location,
            None => self.locations.push(location),
        }
    }

    fn apply_trailers_allocated(&mut self, data: TrailersAllocatedData) {
        for allocated in data.trailers {
            self.trailers.push(Trailer::new(
                allocated.trailer_id,
                data.location.clone(),
                allocated.stack_count,
            ));
        }
    }

    fn apply_stack_count_edited(&mut self, data: StackCountEditedData) {
        if let Some(trailer) = self.trailer_mut(&data.trailer_id) {
            trailer.stack_count = data.new_count;
        }
    }

    fn apply_overload_added(&mut self, data: OverloadAddedData) {
        if let Some(trailer) = self.trailer_mut(&data.destination) {
            trailer.stack_count += data.stacks;
            trailer.overloads.push(Overload {
                source: data.source,
                destination: data.destination,
                stacks: data.stacks,
            });
        }
    }

    fn apply_trailer_finalized(&mut self, data: TrailerFinalizedData) {
        if let Some(trailer) = self.trailer_mut(&data.trailer_id) {
            trailer.state = FinalizeState::Finalized;
            trailer.ld_number = Some(data.ld_number);
            trailer.finalized_at = Some(data.finalized_at);
        }
    }

    fn apply_trailer_info_set(&mut self, data: TrailerInfoSetData) {
        if let Some(trailer) = self.trailer_mut(&data.trailer_id) {
            trailer.trailer_number = data.trailer_number;
            trailer.seal_number = data.seal_number;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> RelaySession {
        let mut session = RelaySession::default();
        let events = session
            .open(SessionId::new(), "12/25/2024", DayNumber::new(4).unwrap())
            .unwrap();
        session.apply_events(events);
        session
    }

    fn name(location: &str) -> LocationName {
        LocationName::new(location)
    }

    fn cross_dock(stacks: i64) -> StackInputs {
        StackInputs {
            cross_dock_stacks: stacks,
            ..Default::default()
        }
    }

    fn aggregate(session: &mut RelaySession, location: &str, inputs: StackInputs) {
        let events = session
            .aggregate(&name(location), LocationKind::Warehouse, &inputs)
            .unwrap();
        session.apply_events(events);
    }

    fn allocate(session: &mut RelaySession, location: &str) {
        let events = session.allocate(&name(location)).unwrap();
        session.apply_events(events);
    }

    fn counts(session: &RelaySession, location: &str) -> Vec<u32> {
        session
            .trailers_for(&name(location))
            .map(Trailer::stack_count)
            .collect()
    }

    #[test]
    fn test_open_twice_rejected() {
        let session = opened();
        let err = session
            .open(SessionId::new(), "12/26/2024", DayNumber::new(5).unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::State(StateError::SessionAlreadyOpened)));
    }

    #[test]
    fn test_commands_need_open_session() {
        let session = RelaySession::default();
        let err = session
            .aggregate(&name("Oxford"), LocationKind::Warehouse, &cross_dock(3))
            .unwrap_err();
        assert!(matches!(err, DomainError::State(StateError::SessionNotOpened)));
    }

    #[test]
    fn test_bread_and_cake_pallets_fit_one_trailer() {
        let mut session = opened();
        aggregate(
            &mut session,
            "Oxford",
            StackInputs {
                bread_trays: 300,
                cake_pallets: 2,
                ..Default::default()
            },
        );
        assert_eq!(session.location(&name("Oxford")).unwrap().total_stacks(), 26);

        allocate(&mut session, "Oxford");
        assert_eq!(counts(&session, "Oxford"), vec![26]);
        assert_eq!(
            session.trailers()[0].id(),
            &TrailerId::new("Oxford_1")
        );
    }

    #[test]
    fn test_allocation_fills_all_but_last() {
        let mut session = opened();
        aggregate(&mut session, "Anderson", cross_dock(150));
        allocate(&mut session, "Anderson");

        assert_eq!(counts(&session, "Anderson"), vec![98, 52]);
        let ids: Vec<_> = session
            .trailers_for(&name("Anderson"))
            .map(|t| t.id().as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["Anderson_1", "Anderson_2"]);
        assert_eq!(session.spare_stacks(&name("Anderson")).unwrap(), 0);
    }

    #[test]
    fn test_allocation_conserves_stacks() {
        for total in [1_i64, 97, 98, 99, 196, 197, 500, 981] {
            let mut session = opened();
            aggregate(&mut session, "Galax", cross_dock(total));
            allocate(&mut session, "Galax");

            let loaded = counts(&session, "Galax");
            assert_eq!(loaded.iter().sum::<u32>() as i64, total);
            assert!(loaded.iter().all(|&count| (1..=98).contains(&count)));
            assert_eq!(loaded.len() as i64, (total + 97) / 98);
        }
    }

    #[test]
    fn test_zero_demand_creates_no_trailers() {
        let mut session = opened();
        aggregate(&mut session, "Galax", StackInputs::default());
        assert!(session.allocate(&name("Galax")).unwrap().is_empty());
    }

    #[test]
    fn test_allocate_unknown_location() {
        let session = opened();
        let err = session.allocate(&name("Nowhere")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_allocate_twice_rejected() {
        let mut session = opened();
        aggregate(&mut session, "Galax", cross_dock(10));
        allocate(&mut session, "Galax");

        let err = session.allocate(&name("Galax")).unwrap_err();
        assert!(matches!(
            err,
            DomainError::State(StateError::AlreadyAllocated { trailers: 1, .. })
        ));
    }

    #[test]
    fn test_aggregate_overwrites() {
        let mut session = opened();
        aggregate(&mut session, "Galax", cross_dock(10));
        aggregate(&mut session, "Galax", cross_dock(10));
        assert_eq!(session.location(&name("Galax")).unwrap().total_stacks(), 10);

        aggregate(&mut session, "Galax", cross_dock(4));
        assert_eq!(session.location(&name("Galax")).unwrap().total_stacks(), 4);
        assert_eq!(session.locations().len(), 1);
    }

    #[test]
    fn test_aggregate_locked_after_allocation() {
        let mut session = opened();
        aggregate(&mut session, "Galax", cross_dock(10));
        allocate(&mut session, "Galax");

        let err = session
            .aggregate(&name("Galax"), LocationKind::Warehouse, &cross_dock(12))
            .unwrap_err();
        assert!(matches!(err, DomainError::State(StateError::LocationLocked { .. })));
    }

    #[test]
    fn test_aggregate_rejects_negative_before_storing() {
        let mut session = opened();
        aggregate(&mut session, "Galax", cross_dock(10));

        let err = session
            .aggregate(&name("Galax"), LocationKind::Warehouse, &cross_dock(-1))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.location(&name("Galax")).unwrap().total_stacks(), 10);
    }

    /// Source with 30 spare stacks, destination trailer at 70/98.
    fn overload_setup() -> RelaySession {
        let mut session = opened();
        aggregate(&mut session, "Anderson", cross_dock(70));
        allocate(&mut session, "Anderson");
        aggregate(&mut session, "Galax", cross_dock(30));
        session
    }

    #[test]
    fn test_overload_conserves_stacks() {
        let mut session = overload_setup();
        let destination = TrailerId::new("Anderson_1");

        let events = session
            .add_overload(&name("Galax"), &destination, 20)
            .unwrap();
        session.apply_events(events);

        assert_eq!(session.spare_stacks(&name("Galax")).unwrap(), 10);
        let trailer = session.trailer(&destination).unwrap();
        assert_eq!(trailer.stack_count(), 90);
        assert_eq!(trailer.overloads().len(), 1);
        assert_eq!(trailer.overloads()[0].stacks, 20);
        // receiving an overload does not create spare for the destination
        assert_eq!(session.spare_stacks(&name("Anderson")).unwrap(), 0);

        let err = session
            .add_overload(&name("Galax"), &destination, 25)
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InsufficientSpare {
                requested: 25,
                spare: 10,
                ..
            })
        ));
        assert_eq!(session.spare_stacks(&name("Galax")).unwrap(), 10);
        assert_eq!(session.trailer(&destination).unwrap().stack_count(), 90);
    }

    #[test]
    fn test_overload_respects_capacity() {
        let session = overload_setup();
        let err = session
            .add_overload(&name("Galax"), &TrailerId::new("Anderson_1"), 29)
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::CapacityExceeded { requested: 99, .. })
        ));
    }

    #[test]
    fn test_overload_of_zero_rejected() {
        let session = overload_setup();
        let err = session
            .add_overload(&name("Galax"), &TrailerId::new("Anderson_1"), 0)
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::NonPositiveTransfer { .. })
        ));
    }

    #[test]
    fn test_allocation_after_overload_packs_remainder() {
        let mut session = overload_setup();
        let events = session
            .add_overload(&name("Galax"), &TrailerId::new("Anderson_1"), 20)
            .unwrap();
        session.apply_events(events);

        assert!(session.is_locked(&name("Galax")));
        allocate(&mut session, "Galax");
        assert_eq!(counts(&session, "Galax"), vec![10]);
        assert_eq!(session.spare_stacks(&name("Galax")).unwrap(), 0);
    }

    #[test]
    fn test_edit_stack_count_bounds() {
        let mut session = overload_setup();
        let id = TrailerId::new("Anderson_1");

        assert!(matches!(
            session.edit_stack_count(&id, -1).unwrap_err(),
            DomainError::Validation(ValidationError::NegativeStackCount { value: -1, .. })
        ));
        assert!(matches!(
            session.edit_stack_count(&id, 99).unwrap_err(),
            DomainError::Validation(ValidationError::CapacityExceeded { requested: 99, .. })
        ));
        assert!(session.edit_stack_count(&id, 70).unwrap().is_empty());

        let events = session.edit_stack_count(&id, 60).unwrap();
        session.apply_events(events);
        assert_eq!(session.trailer(&id).unwrap().stack_count(), 60);
        assert_eq!(session.spare_stacks(&name("Anderson")).unwrap(), 10);
    }

    #[test]
    fn test_edit_keeps_overload_stacks() {
        let mut session = overload_setup();
        let id = TrailerId::new("Anderson_1");
        let events = session.add_overload(&name("Galax"), &id, 20).unwrap();
        session.apply_events(events);

        assert!(matches!(
            session.edit_stack_count(&id, 10).unwrap_err(),
            DomainError::Validation(ValidationError::BelowReceived {
                requested: 10,
                received: 20,
                ..
            })
        ));
        assert_eq!(session.trailer(&id).unwrap().stack_count(), 90);

        // dropping to exactly the received stacks hands Anderson's 70 back
        let events = session.edit_stack_count(&id, 20).unwrap();
        session.apply_events(events);
        let loaded: u32 = session.trailers().iter().map(Trailer::stack_count).sum();
        let spare = session.spare_stacks(&name("Anderson")).unwrap()
            + session.spare_stacks(&name("Galax")).unwrap();
        assert_eq!(loaded + spare, 100);
        assert_eq!(session.spare_stacks(&name("Anderson")).unwrap(), 70);
    }

    #[test]
    fn test_finalization_is_one_way() {
        let mut session = overload_setup();
        let id = TrailerId::new("Anderson_1");

        let events = session.finalize(&id, LdNumber::new("4820193745")).unwrap();
        session.apply_events(events);

        let trailer = session.trailer(&id).unwrap();
        assert!(trailer.is_finalized());
        assert_eq!(trailer.ld_number().map(LdNumber::as_str), Some("4820193745"));
        assert!(trailer.finalized_at().is_some());

        assert!(matches!(
            session.finalize(&id, LdNumber::new("1111111111")).unwrap_err(),
            DomainError::State(StateError::AlreadyFinalized { .. })
        ));
        assert!(matches!(
            session.edit_stack_count(&id, 50).unwrap_err(),
            DomainError::Validation(ValidationError::TrailerFinalized { .. })
        ));
        assert!(matches!(
            session.add_overload(&name("Galax"), &id, 5).unwrap_err(),
            DomainError::Validation(ValidationError::TrailerFinalized { .. })
        ));
        assert!(session.has_ld_number(&LdNumber::new("4820193745")));
    }

    #[test]
    fn test_trailer_info_after_finalization() {
        let mut session = overload_setup();
        let id = TrailerId::new("Anderson_1");

        let events = session.finalize(&id, LdNumber::new("4820193745")).unwrap();
        session.apply_events(events);
        assert_eq!(session.dispatch_status(&id).unwrap(), DispatchStatus::Active);

        let events = session
            .set_trailer_info(&id, Some(" TRK-4410 "), Some("S-2291"))
            .unwrap();
        session.apply_events(events);

        let trailer = session.trailer(&id).unwrap();
        assert_eq!(trailer.trailer_number(), Some("TRK-4410"));
        assert_eq!(session.dispatch_status(&id).unwrap(), DispatchStatus::Dispatched);

        let events = session.set_trailer_info(&id, Some("TRK-4410"), Some("  ")).unwrap();
        session.apply_events(events);
        assert_eq!(session.trailer(&id).unwrap().seal_number(), None);
        assert_eq!(session.dispatch_status(&id).unwrap(), DispatchStatus::Active);
    }

    #[test]
    fn test_unknown_trailer() {
        let session = opened();
        let err = session
            .set_trailer_info(&TrailerId::new("Ghost_1"), None, None)
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound(NotFoundError::Trailer(_))
        ));
    }
}
