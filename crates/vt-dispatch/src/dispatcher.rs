//! The subscription registry and synchronous publish loop.

use std::fmt;

use tracing::warn;

use vt_core::GuardianId;
use vt_notify::Notification;
use vt_route::Route;

use crate::observer::TrackObserver;

// ── SubscriptionId ────────────────────────────────────────────────────────────

/// Handle returned by `subscribe`; the only way to unsubscribe.
///
/// An explicit handle (rather than callback identity) means two distinct
/// subscriptions of "the same" observer type are independently removable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

struct Subscription {
    id:       SubscriptionId,
    /// `Some` restricts the notification channel to one guardian's records;
    /// route publishes go to every subscription regardless.
    guardian: Option<GuardianId>,
    observer: Box<dyn TrackObserver>,
}

/// Fans route-state changes and notifications out to registered observers.
///
/// Publishing is synchronous and in registration order.  Because `publish_*`
/// borrows the registry mutably for its whole duration, no subscription can
/// be added or removed mid-dispatch — `unsubscribe` always takes effect
/// between publishes, which is the re-entrancy guarantee the registry needs.
#[derive(Default)]
pub struct Dispatcher {
    subscriptions: Vec<Subscription>,
    next_id:       u64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registry ──────────────────────────────────────────────────────────

    /// Register an observer for all route publishes and all notifications.
    pub fn subscribe(&mut self, observer: Box<dyn TrackObserver>) -> SubscriptionId {
        self.insert(observer, None)
    }

    /// Register an observer whose notification channel is scoped to one
    /// guardian.  Route publishes are still delivered unfiltered.
    pub fn subscribe_for_guardian(
        &mut self,
        observer: Box<dyn TrackObserver>,
        guardian: GuardianId,
    ) -> SubscriptionId {
        self.insert(observer, Some(guardian))
    }

    /// Remove a subscription.  Returns `false` for an unknown (or already
    /// removed) handle.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn insert(
        &mut self,
        observer: Box<dyn TrackObserver>,
        guardian: Option<GuardianId>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, guardian, observer });
        id
    }

    // ── Publish ───────────────────────────────────────────────────────────

    /// Deliver a route snapshot (or `None` = tracking ended) to every
    /// subscription, in registration order.  A failing observer is logged
    /// and skipped; the rest still run.
    pub fn publish_route(&mut self, route: Option<&Route>) {
        for sub in &mut self.subscriptions {
            if let Err(e) = sub.observer.on_route(route) {
                warn!("observer {} failed on route publish: {e}", sub.id);
            }
        }
    }

    /// Deliver a new notification to every subscription whose guardian
    /// scope matches (unscoped subscriptions receive everything).
    pub fn publish_notification(&mut self, notification: &Notification) {
        for sub in &mut self.subscriptions {
            let in_scope = match sub.guardian {
                None    => true,
                Some(g) => g == notification.guardian,
            };
            if !in_scope {
                continue;
            }
            if let Err(e) = sub.observer.on_notification(notification) {
                warn!("observer {} failed on notification publish: {e}", sub.id);
            }
        }
    }
}
