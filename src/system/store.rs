use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::system::snapshot::MetricsSnapshot;

/// What the UI gets back from [`SnapshotStore::consume_if_dirty`]
#[derive(Debug, Clone)]
pub struct Update {
    pub snapshot: Arc<MetricsSnapshot>,
    /// Set when the last sampler tick failed; the snapshot is then the
    /// previous good one (or the empty sentinel).
    pub failure: Option<String>,
}

#[derive(Debug, Default)]
struct Slot {
    snapshot: Arc<MetricsSnapshot>,
    dirty: bool,
    failure: Option<String>,
}

/// Single-slot hand-off between the sampler thread (writer) and the UI
/// loop (reader). Last writer wins; readers always get a whole snapshot.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    slot: Mutex<Slot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current snapshot and mark it fresh
    pub fn publish(&self, snapshot: MetricsSnapshot) {
        let snapshot = Arc::new(snapshot);
        let mut slot = self.lock();
        slot.snapshot = snapshot;
        slot.failure = None;
        slot.dirty = true;
    }

    /// Record a failed tick, keeping the last good snapshot
    pub fn publish_failure(&self, reason: impl Into<String>) {
        let reason = reason.into();
        let mut slot = self.lock();
        slot.failure = Some(reason);
        slot.dirty = true;
    }

    /// Take the pending update, if any. A second call without an
    /// intervening publish returns `None`.
    pub fn consume_if_dirty(&self) -> Option<Update> {
        let mut slot = self.lock();
        if !slot.dirty {
            return None;
        }
        slot.dirty = false;
        Some(Update {
            snapshot: Arc::clone(&slot.snapshot),
            failure: slot.failure.clone(),
        })
    }

    /// Current snapshot without touching the dirty flag
    pub fn peek(&self) -> Arc<MetricsSnapshot> {
        Arc::clone(&self.lock().snapshot)
    }

    pub fn failure(&self) -> Option<String> {
        self.lock().failure.clone()
    }

    // Every write is a plain field assignment, so a panic while holding the
    // lock cannot leave the slot half-updated.
    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn snapshot_with(cores: &[f32]) -> MetricsSnapshot {
        MetricsSnapshot {
            per_core_usage: cores.to_vec(),
            aggregate_cpu_usage: cores.iter().sum::<f32>() / cores.len().max(1) as f32,
            ..MetricsSnapshot::default()
        }
    }

    #[test]
    fn peek_before_publish_returns_sentinel() {
        let store = SnapshotStore::new();
        assert_eq!(*store.peek(), MetricsSnapshot::default());
        assert!(store.consume_if_dirty().is_none());
    }

    #[test]
    fn consume_twice_yields_update_then_nothing() {
        let store = SnapshotStore::new();
        store.publish(snapshot_with(&[10.0, 20.0]));

        let first = store.consume_if_dirty().expect("fresh snapshot");
        assert_eq!(first.snapshot.per_core_usage, vec![10.0, 20.0]);
        assert!(first.failure.is_none());
        assert!(store.consume_if_dirty().is_none());
    }

    #[test]
    fn peek_does_not_clear_dirty() {
        let store = SnapshotStore::new();
        store.publish(snapshot_with(&[5.0]));
        assert_eq!(store.peek().per_core_usage, vec![5.0]);
        assert!(store.consume_if_dirty().is_some());
    }

    #[test]
    fn last_writer_wins() {
        let store = SnapshotStore::new();
        store.publish(snapshot_with(&[1.0]));
        store.publish(snapshot_with(&[2.0]));
        let update = store.consume_if_dirty().unwrap();
        assert_eq!(update.snapshot.per_core_usage, vec![2.0]);
    }

    #[test]
    fn failure_keeps_snapshot_and_is_cleared_by_publish() {
        let store = SnapshotStore::new();
        store.publish(snapshot_with(&[30.0]));
        store.consume_if_dirty();

        store.publish_failure("disk query failed");
        let update = store.consume_if_dirty().unwrap();
        assert_eq!(update.failure.as_deref(), Some("disk query failed"));
        assert_eq!(update.snapshot.per_core_usage, vec![30.0]);

        store.publish(snapshot_with(&[40.0]));
        assert!(store.failure().is_none());
    }

    #[test]
    fn concurrent_readers_never_see_torn_snapshots() {
        let store = Arc::new(SnapshotStore::new());
        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..500u32 {
                    let v = (i % 100) as f32;
                    store.publish(snapshot_with(&[v, v, v, v]));
                }
            })
        };

        for _ in 0..500 {
            let snap = store.peek();
            if let Some(first) = snap.per_core_usage.first() {
                assert!(snap.per_core_usage.iter().all(|v| v == first));
            }
        }
        writer.join().unwrap();
    }
}
