//! `vt-track` — the route state manager for the `vantrack` engine.
//!
//! # Update path
//!
//! ```text
//! position feed (live or vt-sim)
//!   → RouteTracker::update_location
//!     ① record the fix on the active route
//!     ② vt-proximity::evaluate — which event kinds newly became true?
//!     ③ vt-notify — deduplicated notification per event with a guardian
//!     ④ vt-dispatch — fan new notifications, then the route snapshot,
//!        out to every observer (UI panels, push channel)
//! ```
//!
//! # Ownership & concurrency
//!
//! `RouteTracker` is the single owner of all mutable tracking state; every
//! mutation goes through `&mut self`, so the exclusive borrow serializes
//! the update path — two location updates can never interleave into a torn
//! state.  A deployment feeding it from multiple threads wraps the tracker
//! in a `Mutex`, which is exactly the single-consumer arrangement the
//! design calls for.  Observers receive `&Route` snapshots and must not
//! hold onto mutable expectations about them.

pub mod builder;
pub mod error;
pub mod projection;
pub mod tracker;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::TrackerBuilder;
pub use error::{TrackError, TrackResult};
pub use projection::RouteInfo;
pub use tracker::RouteTracker;
