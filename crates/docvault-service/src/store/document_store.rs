//! The document store: one snapshot, one update entry point.

use tokio::sync::{broadcast, watch};
use tracing::trace;

use docvault_core::events::DomainEvent;

use super::snapshot::StoreSnapshot;
use super::transition::Transition;

/// Capacity of the domain event channel. Slow subscribers that fall this
/// far behind observe `RecvError::Lagged`.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// In-memory authority for documents, folders, and session state.
///
/// The current snapshot lives in a `watch` channel: view layers either
/// read [`snapshot`](Self::snapshot) on each render or hold a receiver
/// from [`subscribe`](Self::subscribe) and re-render when it changes.
/// Every mutation goes through [`update`](Self::update), which runs the
/// update function under the channel's write lock, so no reader can
/// observe a half-applied operation.
#[derive(Debug)]
pub struct DocumentStore {
    /// Current state; receivers are notified on every commit.
    state: watch::Sender<StoreSnapshot>,
    /// Domain events describing committed transitions.
    events: broadcast::Sender<DomainEvent>,
}

impl DocumentStore {
    /// Creates a store holding only the root folder.
    pub fn new() -> Self {
        Self::with_snapshot(StoreSnapshot::initial())
    }

    /// Creates a store seeded with an existing snapshot.
    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        let (state, _) = watch::channel(snapshot);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { state, events }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.borrow().clone()
    }

    /// Runs `f` against the current state without copying it.
    ///
    /// `f` must not call back into the store.
    pub fn read<R>(&self, f: impl FnOnce(&StoreSnapshot) -> R) -> R {
        f(&self.state.borrow())
    }

    /// A receiver that is marked changed after every committed update.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.state.subscribe()
    }

    /// A receiver for domain events published after each commit.
    pub fn subscribe_events(&self) -> broadcast::Receiver<DomainEvent> {
        self.events.subscribe()
    }

    /// Applies an update function to the current snapshot.
    ///
    /// `f` receives the previous snapshot and returns a [`Transition`]:
    /// either a replacement snapshot or "unchanged", plus the value handed
    /// back to the caller. Committed transitions notify snapshot
    /// subscribers and publish their events; unchanged ones do neither.
    ///
    /// `f` runs while the state is write-locked and must not call back
    /// into the store.
    pub fn update<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&StoreSnapshot) -> Transition<T>,
    {
        let mut output = None;
        let mut events = Vec::new();

        let committed = self.state.send_if_modified(|current| {
            let transition = f(current);
            output = Some(transition.output);
            match transition.next {
                Some(next) => {
                    *current = next;
                    events = transition.events;
                    true
                }
                None => false,
            }
        });

        trace!(committed, events = events.len(), "Store update applied");

        for payload in events {
            // No subscribers is not an error.
            let _ = self.events.send(DomainEvent::new(payload));
        }

        match output {
            Some(output) => output,
            None => unreachable!("send_if_modified always invokes its closure"),
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docvault_core::events::{EventPayload, SessionEvent};
    use docvault_core::types::FolderId;
    use docvault_entity::folder::Folder;

    #[test]
    fn test_commit_replaces_state() {
        let store = DocumentStore::new();
        let id = store.update(|prev| {
            let mut next = prev.clone();
            let folder = Folder::new_child("Reports", FolderId::root());
            let id = folder.id;
            next.folders.push(folder);
            Transition::commit(next, id)
        });
        assert!(store.snapshot().folder(id).is_some());
    }

    #[test]
    fn test_unchanged_keeps_state() {
        let store = DocumentStore::new();
        let before = store.snapshot();
        let out = store.update(|_| Transition::unchanged(42));
        assert_eq!(out, 42);
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_subscribers_notified_only_on_commit() {
        let store = DocumentStore::new();
        let mut rx = store.subscribe();
        rx.mark_unchanged();

        store.update(|_| Transition::unchanged(()));
        assert!(!rx.has_changed().unwrap());

        let target = FolderId::new();
        store.update(|prev| {
            let mut next = prev.clone();
            next.current_folder_id = target;
            Transition::commit(next, ())
        });
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().current_folder_id, target);
    }

    #[tokio::test]
    async fn test_events_published_after_commit() {
        let store = DocumentStore::new();
        let mut events = store.subscribe_events();

        store.update(|_| {
            Transition::unchanged(()).with_event(SessionEvent::Navigated {
                folder_id: FolderId::root(),
            })
        });
        store.update(|prev| {
            Transition::commit(prev.clone(), ()).with_event(SessionEvent::SelectionChanged {
                document_id: None,
            })
        });

        let event = events.recv().await.unwrap();
        assert!(matches!(
            event.payload,
            EventPayload::Session(SessionEvent::SelectionChanged { .. })
        ));
        assert!(events.try_recv().is_err());
    }
}
