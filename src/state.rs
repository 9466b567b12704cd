//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sqlx::PgPool;
use tokio::sync::OwnedMutexGuard;
use uuid::Uuid;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Application configuration
    config: Config,

    /// Serialises batch commands per event
    event_locks: EventLocks,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                config,
                event_locks: EventLocks::default(),
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the per-event command locks
    pub fn event_locks(&self) -> &EventLocks {
        &self.inner.event_locks
    }
}

/// One async mutex per event id
///
/// An entry lives only while some caller holds or waits for the event's lock.
#[derive(Default)]
pub struct EventLocks {
    locks: Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>>,
}

impl EventLocks {
    /// Wait for and take the lock of an event; released when the guard drops
    pub async fn acquire(&self, event_id: Uuid) -> EventLockGuard<'_> {
        let lock = {
            let mut locks = self.entries();
            // Entries left behind by callers cancelled while waiting
            locks.retain(|id, lock| *id == event_id || Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(event_id).or_default())
        };
        EventLockGuard {
            locks: self,
            event_id,
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Number of events currently locked or waited on
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn release(&self, event_id: &Uuid) {
        let mut locks = self.entries();
        if locks.get(event_id).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(event_id);
        }
    }
}

/// Held lock of one event
pub struct EventLockGuard<'a> {
    locks: &'a EventLocks,
    event_id: Uuid,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for EventLockGuard<'_> {
    fn drop(&mut self) {
        // The owned guard keeps a reference to the mutex until it is dropped
        drop(self.guard.take());
        self.locks.release(&self.event_id);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_same_event_is_serialised() {
        let locks = EventLocks::default();
        let event_id = Uuid::new_v4();

        let guard = locks.acquire(event_id).await;
        let second = tokio::time::timeout(Duration::from_millis(50), locks.acquire(event_id)).await;
        assert!(second.is_err());

        drop(guard);
        let third = tokio::time::timeout(Duration::from_millis(50), locks.acquire(event_id)).await;
        assert!(third.is_ok());
    }

    #[tokio::test]
    async fn test_different_events_do_not_block() {
        let locks = EventLocks::default();
        let _first = locks.acquire(Uuid::new_v4()).await;
        let second = tokio::time::timeout(Duration::from_millis(50), locks.acquire(Uuid::new_v4())).await;
        assert!(second.is_ok());
        assert_eq!(locks.len(), 2);
    }

    #[tokio::test]
    async fn test_released_locks_are_forgotten() {
        let locks = EventLocks::default();
        for _ in 0..1000 {
            let guard = locks.acquire(Uuid::new_v4()).await;
            assert_eq!(locks.len(), 1);
            drop(guard);
        }
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn test_lock_is_kept_while_waited_on() {
        let locks = Arc::new(EventLocks::default());
        let event_id = Uuid::new_v4();

        let guard = locks.acquire(event_id).await;
        let waiter = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _guard = locks.acquire(event_id).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(guard);
        assert_eq!(locks.len(), 1);

        waiter.await.unwrap();
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_waiter_does_not_leak() {
        let locks = EventLocks::default();
        let event_id = Uuid::new_v4();

        let guard = locks.acquire(event_id).await;
        let cancelled = tokio::time::timeout(Duration::from_millis(20), locks.acquire(event_id)).await;
        assert!(cancelled.is_err());
        drop(guard);
        assert!(locks.is_empty());

        let other = locks.acquire(Uuid::new_v4()).await;
        assert_eq!(locks.len(), 1);
        drop(other);
        assert!(locks.is_empty());
    }
}
