//! Core aggregate and domain event traits.

use common::{SessionId, Version};
use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events record facts that have already been accepted by an
/// aggregate. They are immutable and named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Clone {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;
}

/// Trait for aggregates whose state is changed only by applying events.
///
/// Command methods on an aggregate inspect the current state and either
/// reject the command or return the events it produces. `apply` then folds
/// those events into the state:
/// - Given the same state and event, it always produces the same new state
/// - It has no side effects
/// - It never fails (events are facts that have happened)
pub trait Aggregate: Default + Sized {
    /// The type of events this aggregate produces and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's identifier, or None before it is opened.
    fn id(&self) -> Option<SessionId>;

    /// Returns the number of events applied so far.
    fn version(&self) -> Version;

    /// Sets the aggregate version.
    fn set_version(&mut self, version: Version);

    /// Applies an event to the aggregate, updating its state.
    fn apply(&mut self, event: Self::Event);

    /// Applies multiple events in sequence.
    fn apply_events(&mut self, events: impl IntoIterator<Item = Self::Event>) {
        for event in events {
            self.apply(event);
        }
    }
}
