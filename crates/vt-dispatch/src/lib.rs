//! `vt-dispatch` — route/notification fan-out for the `vantrack` engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`observer`]    | `TrackObserver` trait, `NoopObserver`                |
//! | [`dispatcher`]  | `Dispatcher` — subscription registry + publish       |
//! | [`push`]        | `PushTransport` port, `NoopPush`, `PushObserver`     |
//! | [`interaction`] | Transport→UI message protocol (clicks/closes)        |
//!
//! # Isolation guarantee
//!
//! `publish_*` invokes every registered observer synchronously, in
//! registration order.  One observer returning an error is logged and does
//! not prevent the remaining observers from being invoked — a flaky UI
//! panel can never starve the push channel, or vice versa.

pub mod dispatcher;
pub mod interaction;
pub mod observer;
pub mod push;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dispatcher::{Dispatcher, SubscriptionId};
pub use interaction::PushInteraction;
pub use observer::{NoopObserver, ObserverError, TrackObserver};
pub use push::{NoopPush, PushError, PushObserver, PushTransport};
