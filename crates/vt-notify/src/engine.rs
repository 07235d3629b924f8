//! The notification engine: dedup, guardian-scoped reads, retention.

use rustc_hash::FxHashMap;
use tracing::warn;

use vt_core::{EventKind, GuardianId, NotificationId, Timestamp};

use crate::notification::{Notification, NotificationPayload, derive_id};
use crate::store::KvStore;

/// All live records are mirrored under one store key as a JSON array; the
/// retention sweep keeps the value bounded.
const STATE_KEY: &str = "notifications";

// ── Outcome ───────────────────────────────────────────────────────────────────

/// What `notify` did.  `Suppressed` is a deliberate no-op, not a failure —
/// callers and tests can tell "no duplicate created" apart from "write
/// failed" (writes never fail upward; see crate docs).
#[derive(Clone, Debug)]
pub enum NotifyOutcome {
    Created(Notification),
    Suppressed,
}

impl NotifyOutcome {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, NotifyOutcome::Suppressed)
    }

    pub fn created(self) -> Option<Notification> {
        match self {
            NotifyOutcome::Created(n) => Some(n),
            NotifyOutcome::Suppressed => None,
        }
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Turns qualifying events into deduplicated, guardian-scoped notification
/// records, mirrored to a [`KvStore`] best-effort.
///
/// The in-memory index is authoritative for reads; the store exists so the
/// records (and therefore the dedup ids) survive a process restart.
pub struct NotificationEngine<S: KvStore> {
    store:           S,
    dedup_bucket_ms: i64,
    index:           FxHashMap<NotificationId, Notification>,
}

impl<S: KvStore> NotificationEngine<S> {
    /// Create an engine over `store`, restoring any persisted records.
    ///
    /// A store read failure or a corrupt snapshot starts the engine empty —
    /// logged, never fatal.
    pub fn new(store: S, dedup_bucket_ms: i64) -> Self {
        let mut engine = Self {
            store,
            dedup_bucket_ms,
            index: FxHashMap::default(),
        };
        engine.load_persisted();
        engine
    }

    /// Consume the engine and return the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    // ── Write path ────────────────────────────────────────────────────────

    /// Record one qualifying event for `guardian`.
    ///
    /// The id is derived from (route, stop, kind, time bucket); if a record
    /// with that id already exists the call is a no-op returning
    /// [`NotifyOutcome::Suppressed`].
    pub fn notify(
        &mut self,
        guardian:   GuardianId,
        payload:    NotificationPayload,
        stop_label: &str,
        now:        Timestamp,
    ) -> NotifyOutcome {
        let id = derive_id(
            payload.route,
            payload.stop,
            payload.kind,
            now.bucket(self.dedup_bucket_ms),
        );

        if self.index.contains_key(&id) {
            return NotifyOutcome::Suppressed;
        }

        let (title, message) = render(payload.kind, stop_label);
        let notification = Notification {
            id,
            guardian,
            title,
            message,
            payload,
            created_at: now,
            is_read: false,
        };

        self.index.insert(id, notification.clone());
        self.persist();
        NotifyOutcome::Created(notification)
    }

    /// Mark one of `guardian`'s notifications read.  Another guardian's id
    /// (or an unknown one) is a no-op returning `false`.
    pub fn mark_as_read(&mut self, id: NotificationId, guardian: GuardianId) -> bool {
        match self.index.get_mut(&id) {
            Some(n) if n.guardian == guardian => {
                if !n.is_read {
                    n.is_read = true;
                    self.persist();
                }
                true
            }
            _ => false,
        }
    }

    /// Delete one of `guardian`'s notifications.  Guardian-scoped the same
    /// way as [`mark_as_read`][Self::mark_as_read].
    pub fn delete(&mut self, id: NotificationId, guardian: GuardianId) -> bool {
        match self.index.get(&id) {
            Some(n) if n.guardian == guardian => {
                self.index.remove(&id);
                self.persist();
                true
            }
            _ => false,
        }
    }

    /// Remove every record older than `max_age_ms`.  Returns how many were
    /// swept.  Run opportunistically (the tracker runs it on subscribe) —
    /// no background timer is required for correctness, only growth control.
    pub fn cleanup_old(&mut self, now: Timestamp, max_age_ms: i64) -> usize {
        let before = self.index.len();
        self.index
            .retain(|_, n| now.saturating_elapsed_since(n.created_at) <= max_age_ms);
        let removed = before - self.index.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    // ── Read path ─────────────────────────────────────────────────────────

    /// All of `guardian`'s notifications, most recent first.
    pub fn for_guardian(&self, guardian: GuardianId) -> Vec<Notification> {
        let mut out: Vec<Notification> = self
            .index
            .values()
            .filter(|n| n.guardian == guardian)
            .cloned()
            .collect();
        // Newest first; id as a deterministic tie-break within one instant.
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        out
    }

    pub fn unread_count(&self, guardian: GuardianId) -> usize {
        self.index
            .values()
            .filter(|n| n.guardian == guardian && !n.is_read)
            .count()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // ── Persistence (best-effort) ─────────────────────────────────────────

    fn load_persisted(&mut self) {
        let value = match self.store.get(STATE_KEY) {
            Ok(Some(v)) => v,
            Ok(None)    => return,
            Err(e) => {
                warn!("notification store read failed, starting empty: {e}");
                return;
            }
        };
        match serde_json::from_value::<Vec<Notification>>(value) {
            Ok(records) => {
                for n in records {
                    self.index.insert(n.id, n);
                }
            }
            Err(e) => warn!("persisted notifications unreadable, starting empty: {e}"),
        }
    }

    fn persist(&mut self) {
        let records: Vec<&Notification> = self.index.values().collect();
        let value = match serde_json::to_value(&records) {
            Ok(v) => v,
            Err(e) => {
                warn!("notification serialization failed, record kept in memory only: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(STATE_KEY, value) {
            warn!("notification store write failed, record kept in memory only: {e}");
        }
    }
}

// ── Message templating ────────────────────────────────────────────────────────

fn render(kind: EventKind, stop_label: &str) -> (String, String) {
    match kind {
        EventKind::Proximity => (
            "Van approaching".to_owned(),
            format!("The school van is approaching {stop_label}."),
        ),
        EventKind::Arrival => (
            "Van arrived".to_owned(),
            format!("The school van has arrived at {stop_label}."),
        ),
        EventKind::Delay => (
            "Van running late".to_owned(),
            format!("The school van is running late for {stop_label}."),
        ),
    }
}
