//! The notification record and its deterministic id.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use vt_core::{EventKind, GuardianId, NotificationId, RouteId, StopId, Timestamp};

// ── Payload ───────────────────────────────────────────────────────────────────

/// The identity a delivery transport needs to reconstruct a deep link back
/// into the app: which route, which stop, which kind of event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NotificationPayload {
    pub route: RouteId,
    pub stop:  StopId,
    pub kind:  EventKind,
}

// ── Record ────────────────────────────────────────────────────────────────────

/// A durable record of one delivered event.
///
/// Created by the engine on a qualifying event; mutated only by
/// `mark_as_read`; removed explicitly or by the retention sweep.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    pub id:         NotificationId,
    pub guardian:   GuardianId,
    pub title:      String,
    pub message:    String,
    pub payload:    NotificationPayload,
    pub created_at: Timestamp,
    pub is_read:    bool,
}

impl Notification {
    pub fn kind(&self) -> EventKind {
        self.payload.kind
    }
}

// ── Deterministic id ──────────────────────────────────────────────────────────

/// Derive the structural notification id from (route, stop, kind, bucket).
///
/// Same inputs → same id, across processes and restarts, which is what lets
/// a store-backed existence check suppress duplicates after a reconnect or
/// replay.  `bucket` is the coarse time bucket from
/// [`Timestamp::bucket`][vt_core::Timestamp::bucket].
pub fn derive_id(route: RouteId, stop: StopId, kind: EventKind, bucket: i64) -> NotificationId {
    let mut hasher = FxHasher::default();
    hasher.write_u64(route.0);
    hasher.write_u32(stop.0);
    hasher.write_u8(match kind {
        EventKind::Proximity => 0,
        EventKind::Arrival   => 1,
        EventKind::Delay     => 2,
    });
    hasher.write_i64(bucket);
    NotificationId(hasher.finish())
}
