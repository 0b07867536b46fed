//! The value an update function hands back to the store.

use docvault_core::events::EventPayload;

use super::snapshot::StoreSnapshot;

/// Result of applying one operation to a snapshot.
///
/// Either a replacement snapshot (committed and broadcast) or no change,
/// together with the value the operation returns to its caller and the
/// events describing what happened.
#[derive(Debug)]
#[must_use = "a transition does nothing until returned to DocumentStore::update"]
pub struct Transition<T> {
    pub(crate) next: Option<StoreSnapshot>,
    pub(crate) output: T,
    pub(crate) events: Vec<EventPayload>,
}

impl<T> Transition<T> {
    /// Replace the state with `next`.
    pub fn commit(next: StoreSnapshot, output: T) -> Self {
        Self {
            next: Some(next),
            output,
            events: Vec::new(),
        }
    }

    /// Leave the state untouched.
    pub fn unchanged(output: T) -> Self {
        Self {
            next: None,
            output,
            events: Vec::new(),
        }
    }

    /// Attach an event, published only if the transition commits.
    pub fn with_event(mut self, event: impl Into<EventPayload>) -> Self {
        self.events.push(event.into());
        self
    }
}
