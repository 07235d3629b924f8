//! `vt-notify` — the notification engine for the `vantrack` engine.
//!
//! Storage is pluggable behind the [`KvStore`] port:
//!
//! | Feature  | Backend                     | Durability                    |
//! |----------|-----------------------------|-------------------------------|
//! | *(none)* | [`MemoryStore`]             | process lifetime only         |
//! | `sqlite` | [`SqliteStore`]             | survives restart              |
//!
//! # Failure semantics
//!
//! Losing a notification is preferable to crashing the tracking loop:
//! every store fault is logged and the engine keeps serving from its
//! in-memory index.  Store errors never reach the engine's callers.
//!
//! # Dedup
//!
//! A notification's id is derived from (route, stop, kind, time bucket) —
//! see [`derive_id`].  Re-notifying the same underlying event is a
//! [`NotifyOutcome::Suppressed`] no-op, which combined with the evaluator's
//! in-memory seen-set gives two independent layers against duplicate
//! delivery on reconnect or replay.

pub mod engine;
pub mod error;
pub mod notification;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{NotificationEngine, NotifyOutcome};
pub use error::{StoreError, StoreResult};
pub use notification::{Notification, NotificationPayload, derive_id};
pub use store::{KvStore, MemoryStore};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
