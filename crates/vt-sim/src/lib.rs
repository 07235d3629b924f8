//! `vt-sim` — deterministic position feed double for the `vantrack` engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`source`]    | `PositionSource` — the feed port the tracker consumes |
//! | [`simulator`] | `MovementSimulator` — waypoint interpolation          |
//! | [`error`]     | `SimError`, `SimResult<T>`                            |
//!
//! # Why a pull model
//!
//! The simulator is a cooperative ticker: the caller asks for the next fix,
//! nothing fires on its own.  That makes `stop()` trivially synchronous (no
//! pending tick can land after it returns) and keeps the tracker's
//! consumption loop identical for a live feed and the simulator — both are
//! just a [`PositionSource`].

pub mod error;
pub mod simulator;
pub mod source;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use simulator::MovementSimulator;
pub use source::PositionSource;
