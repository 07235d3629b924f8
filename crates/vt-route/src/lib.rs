//! `vt-route` — the route aggregate for the `vantrack` engine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`stop`]   | `Stop`, `StopStatus` — forward-only per-stop state      |
//! | [`route`]  | `Route`, `PositionFix` — one van trip                   |
//! | [`loader`] | CSV stop-roster loader                                  |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                          |
//!
//! # Ownership
//!
//! A `Route` is exclusively owned by the tracker in `vt-track`; every other
//! component reads it through a shared reference and must not mutate it.
//! All mutating operations live on `Route` itself so the invariants
//! (monotonic stop status, fixed stop order) are enforced in one place.

pub mod error;
pub mod loader;
pub mod route;
pub mod stop;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use loader::{load_stops_csv, load_stops_reader};
pub use route::{PositionFix, Route};
pub use stop::{Stop, StopStatus};
