//! `vt-proximity` — the proximity evaluator for the `vantrack` engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`event`]    | `ProximityEvent` — one newly-true fact about the trip   |
//! | [`seen`]     | `SeenEvents` — per-stop memory of already-fired kinds   |
//! | [`estimate`] | `LegEstimates` — injected expected-duration budgets     |
//! | [`evaluate`] | The decision function itself                            |
//!
//! # Design notes
//!
//! The evaluator is the pure half of the update path: it reads the route
//! snapshot and the caller-held [`SeenEvents`] and decides which event kinds
//! have *newly* become true.  It performs no I/O and creates no
//! notifications — the tracker in `vt-track` owns the mutation and fan-out
//! that follow.  Keeping the decision side-effect-free is what makes the
//! dedup properties directly testable: feed a position sequence, count
//! events.

pub mod estimate;
pub mod evaluate;
pub mod event;
pub mod seen;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use estimate::LegEstimates;
pub use evaluate::evaluate;
pub use event::ProximityEvent;
pub use seen::SeenEvents;
