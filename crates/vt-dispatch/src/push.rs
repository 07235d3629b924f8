//! The best-effort push-delivery port.

use thiserror::Error;
use tracing::warn;

use vt_notify::Notification;

use crate::observer::{ObserverError, TrackObserver};

// ── Port ──────────────────────────────────────────────────────────────────────

/// Delivery-channel failures.  Absorbed by [`PushObserver`] — they never
/// reach the tracker or block the update path.
#[derive(Debug, Error)]
pub enum PushError {
    #[error("push permission not granted")]
    PermissionDenied,

    #[error("push channel offline")]
    Offline,

    #[error("push transport error: {0}")]
    Transport(String),
}

/// A platform notification layer: renders notification intents as actual
/// platform notifications.  The engine does not require acknowledgment —
/// `deliver` returning `Ok` means "handed to the channel", nothing more.
pub trait PushTransport {
    fn deliver(&mut self, notification: &Notification) -> Result<(), PushError>;
}

/// A transport that silently drops everything.  The default when a
/// deployment has no push channel wired up.
#[derive(Default)]
pub struct NoopPush;

impl PushTransport for NoopPush {
    fn deliver(&mut self, _notification: &Notification) -> Result<(), PushError> {
        Ok(())
    }
}

// ── Adapter ───────────────────────────────────────────────────────────────────

/// Adapts any [`PushTransport`] into a best-effort [`TrackObserver`].
///
/// Delivery failures are counted and logged here — `on_notification` always
/// returns `Ok`, so a dead push channel is invisible to the dispatcher and
/// can never starve other observers or fail the tracker.
pub struct PushObserver<P: PushTransport> {
    transport: P,
    delivered: usize,
    failed:    usize,
}

impl<P: PushTransport> PushObserver<P> {
    pub fn new(transport: P) -> Self {
        Self { transport, delivered: 0, failed: 0 }
    }

    /// (delivered, failed) counters — demo/diagnostic surface.
    pub fn stats(&self) -> (usize, usize) {
        (self.delivered, self.failed)
    }

    pub fn into_transport(self) -> P {
        self.transport
    }
}

impl<P: PushTransport> TrackObserver for PushObserver<P> {
    fn on_notification(&mut self, notification: &Notification) -> Result<(), ObserverError> {
        match self.transport.deliver(notification) {
            Ok(())  => self.delivered += 1,
            Err(e) => {
                self.failed += 1;
                warn!("push delivery failed for {}: {e}", notification.id);
            }
        }
        Ok(())
    }
}
