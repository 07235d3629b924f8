//! Unit tests for the dispatcher, push adapter, and interaction protocol.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use vt_core::{Direction, DriverId, EventKind, GuardianId, NotificationId, RouteId, StopId,
              Timestamp};
use vt_notify::{Notification, NotificationPayload};
use vt_route::Route;

use crate::dispatcher::Dispatcher;
use crate::observer::{ObserverError, TrackObserver};
use crate::push::{PushError, PushObserver, PushTransport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn notification(guardian: u64) -> Notification {
    Notification {
        id:       NotificationId(1),
        guardian: GuardianId(guardian),
        title:    "Van approaching".to_owned(),
        message:  "The school van is approaching Ava M..".to_owned(),
        payload:  NotificationPayload {
            route: RouteId(1),
            stop:  StopId(0),
            kind:  EventKind::Proximity,
        },
        created_at: Timestamp(1_000),
        is_read:    false,
    }
}

fn empty_route() -> Route {
    Route::new(
        RouteId(1),
        DriverId(7),
        "Pat",
        Direction::ToSchool,
        Vec::new(),
        Timestamp::ZERO,
    )
}

/// Counts every callback it receives.
struct Counter {
    routes:        Arc<AtomicUsize>,
    notifications: Arc<AtomicUsize>,
}

impl Counter {
    fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let routes = Arc::new(AtomicUsize::new(0));
        let notifications = Arc::new(AtomicUsize::new(0));
        (
            Self { routes: Arc::clone(&routes), notifications: Arc::clone(&notifications) },
            routes,
            notifications,
        )
    }
}

impl TrackObserver for Counter {
    fn on_route(&mut self, _route: Option<&Route>) -> Result<(), ObserverError> {
        self.routes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
    fn on_notification(&mut self, _n: &Notification) -> Result<(), ObserverError> {
        self.notifications.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Fails every callback.
struct AlwaysFails;

impl TrackObserver for AlwaysFails {
    fn on_route(&mut self, _route: Option<&Route>) -> Result<(), ObserverError> {
        Err("panel crashed".into())
    }
    fn on_notification(&mut self, _n: &Notification) -> Result<(), ObserverError> {
        Err("panel crashed".into())
    }
}

// ── Fan-out & isolation ───────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn failing_observer_does_not_starve_the_rest() {
        let mut dispatcher = Dispatcher::new();
        let (before, before_routes, _) = Counter::new();
        let (after, after_routes, _) = Counter::new();

        // Failure sandwiched between two healthy observers.
        dispatcher.subscribe(Box::new(before));
        dispatcher.subscribe(Box::new(AlwaysFails));
        dispatcher.subscribe(Box::new(after));

        dispatcher.publish_route(Some(&empty_route()));

        assert_eq!(before_routes.load(Ordering::SeqCst), 1);
        assert_eq!(after_routes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ended_route_publishes_none() {
        struct ExpectNone(Arc<AtomicUsize>);
        impl TrackObserver for ExpectNone {
            fn on_route(&mut self, route: Option<&Route>) -> Result<(), ObserverError> {
                if route.is_none() {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
                Ok(())
            }
        }

        let nones = Arc::new(AtomicUsize::new(0));
        let mut dispatcher = Dispatcher::new();
        dispatcher.subscribe(Box::new(ExpectNone(Arc::clone(&nones))));

        dispatcher.publish_route(None);
        assert_eq!(nones.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registration_order_preserved() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        struct Tagged(&'static str, Arc<std::sync::Mutex<Vec<&'static str>>>);
        impl TrackObserver for Tagged {
            fn on_route(&mut self, _r: Option<&Route>) -> Result<(), ObserverError> {
                self.1.lock().unwrap().push(self.0);
                Ok(())
            }
        }

        let mut dispatcher = Dispatcher::new();
        dispatcher.subscribe(Box::new(Tagged("first", Arc::clone(&order))));
        dispatcher.subscribe(Box::new(Tagged("second", Arc::clone(&order))));
        dispatcher.subscribe(Box::new(Tagged("third", Arc::clone(&order))));

        dispatcher.publish_route(None);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn notification_scope_filters_by_guardian() {
        let mut dispatcher = Dispatcher::new();
        let (ava_obs, _, ava_notifs) = Counter::new();
        let (ben_obs, _, ben_notifs) = Counter::new();
        let (all_obs, _, all_notifs) = Counter::new();

        dispatcher.subscribe_for_guardian(Box::new(ava_obs), GuardianId(100));
        dispatcher.subscribe_for_guardian(Box::new(ben_obs), GuardianId(101));
        dispatcher.subscribe(Box::new(all_obs));

        dispatcher.publish_notification(&notification(100));

        assert_eq!(ava_notifs.load(Ordering::SeqCst), 1);
        assert_eq!(ben_notifs.load(Ordering::SeqCst), 0);
        assert_eq!(all_notifs.load(Ordering::SeqCst), 1, "unscoped sees everything");
    }

    #[test]
    fn guardian_scope_does_not_filter_route_publishes() {
        let mut dispatcher = Dispatcher::new();
        let (obs, routes, _) = Counter::new();
        dispatcher.subscribe_for_guardian(Box::new(obs), GuardianId(100));

        dispatcher.publish_route(Some(&empty_route()));
        assert_eq!(routes.load(Ordering::SeqCst), 1);
    }
}

// ── Unsubscribe ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod unsubscribe_tests {
    use super::*;

    #[test]
    fn unsubscribed_observer_stops_receiving() {
        let mut dispatcher = Dispatcher::new();
        let (obs, routes, _) = Counter::new();
        let id = dispatcher.subscribe(Box::new(obs));

        dispatcher.publish_route(None);
        assert!(dispatcher.unsubscribe(id));
        dispatcher.publish_route(None);

        assert_eq!(routes.load(Ordering::SeqCst), 1, "only the pre-unsubscribe publish");
        assert_eq!(dispatcher.subscriber_count(), 0);
    }

    #[test]
    fn unknown_or_stale_handle_is_false() {
        let mut dispatcher = Dispatcher::new();
        let id = dispatcher.subscribe(Box::new(super::Counter::new().0));

        assert!(dispatcher.unsubscribe(id));
        assert!(!dispatcher.unsubscribe(id), "second removal of the same handle");
    }

    #[test]
    fn handles_are_not_reused() {
        let mut dispatcher = Dispatcher::new();
        let a = dispatcher.subscribe(Box::new(super::Counter::new().0));
        dispatcher.unsubscribe(a);
        let b = dispatcher.subscribe(Box::new(super::Counter::new().0));
        assert_ne!(a, b);
    }
}

// ── Push adapter ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod push_tests {
    use super::*;

    /// A transport that is permanently offline.
    struct OfflineTransport;
    impl PushTransport for OfflineTransport {
        fn deliver(&mut self, _n: &Notification) -> Result<(), PushError> {
            Err(PushError::Offline)
        }
    }

    /// Records delivered notification ids.
    #[derive(Default)]
    struct RecordingTransport {
        delivered: Vec<NotificationId>,
    }
    impl PushTransport for RecordingTransport {
        fn deliver(&mut self, n: &Notification) -> Result<(), PushError> {
            self.delivered.push(n.id);
            Ok(())
        }
    }

    #[test]
    fn delivery_failure_is_absorbed() {
        let mut observer = PushObserver::new(OfflineTransport);
        let result = observer.on_notification(&notification(100));
        assert!(result.is_ok(), "transport failure must not surface as observer failure");
        assert_eq!(observer.stats(), (0, 1));
    }

    #[test]
    fn offline_push_does_not_block_other_observers() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.subscribe(Box::new(PushObserver::new(OfflineTransport)));
        let (obs, _, notifs) = Counter::new();
        dispatcher.subscribe(Box::new(obs));

        dispatcher.publish_notification(&notification(100));
        assert_eq!(notifs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn working_transport_receives_records() {
        let mut observer = PushObserver::new(RecordingTransport::default());
        observer.on_notification(&notification(100)).unwrap();
        assert_eq!(observer.stats(), (1, 0));
        assert_eq!(observer.into_transport().delivered, vec![NotificationId(1)]);
    }
}

// ── Interaction protocol ──────────────────────────────────────────────────────

#[cfg(test)]
mod interaction_tests {
    use super::*;
    use crate::interaction::PushInteraction;

    #[test]
    fn click_round_trips_through_wire_format() {
        let msg = PushInteraction::Click(NotificationPayload {
            route: RouteId(3),
            stop:  StopId(1),
            kind:  EventKind::Arrival,
        });

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "notification-click",
                "payload": {"route": 3, "stop": 1, "kind": "arrival"}
            })
        );

        let back: PushInteraction = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn close_carries_payload_identity() {
        let msg = PushInteraction::Close(NotificationPayload {
            route: RouteId(9),
            stop:  StopId(4),
            kind:  EventKind::Proximity,
        });
        assert_eq!(msg.payload().stop, StopId(4));
    }
}
