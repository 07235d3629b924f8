//! `vt-core` — foundational types for the `vantrack` route tracking engine.
//!
//! This crate is a dependency of every other `vt-*` crate.  It intentionally
//! has no `vt-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`ids`]       | `RouteId`, `StopId`, `DriverId`, `GuardianId`, `NotificationId` |
//! | [`geo`]       | `Coordinate`, haversine distance                    |
//! | [`time`]      | `Timestamp` (unix milliseconds)                     |
//! | [`config`]    | `TrackerConfig` — thresholds and retention defaults |
//! | [`direction`] | `Direction` enum (to school / to home)              |
//! | [`event`]     | `EventKind` enum (proximity / arrival / delay)      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |
//!           | Required by `vt-notify`.                                  |

pub mod config;
pub mod direction;
pub mod event;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrackerConfig;
pub use direction::Direction;
pub use event::EventKind;
pub use geo::Coordinate;
pub use ids::{DriverId, GuardianId, NotificationId, RouteId, StopId};
pub use time::Timestamp;
