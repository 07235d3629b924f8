//! The `RouteTracker` and its update path.

use tracing::{debug, info};

use vt_core::{Coordinate, Direction, DriverId, GuardianId, NotificationId, RouteId, StopId,
              Timestamp, TrackerConfig};
use vt_dispatch::{Dispatcher, SubscriptionId, TrackObserver};
use vt_notify::{KvStore, Notification, NotificationEngine, NotificationPayload, NotifyOutcome};
use vt_proximity::{LegEstimates, SeenEvents, evaluate};
use vt_route::{Route, Stop, StopStatus};

use crate::error::{TrackError, TrackResult};
use crate::projection::RouteInfo;

/// The single source of truth for the active route.
///
/// At most one route is active at a time; starting a new one implicitly
/// ends any prior trip.  All mutation passes through this type — no other
/// component can race on stop status or the position fix.
///
/// Create via [`TrackerBuilder`][crate::TrackerBuilder].
pub struct RouteTracker<S: KvStore> {
    config: TrackerConfig,

    /// The active route, if a trip is underway.
    route: Option<Route>,

    /// The most recently ended route — kept (not deleted) so late queries
    /// can still show the finished trip.
    last_ended: Option<Route>,

    /// Per-stop fired-event memory for the active route; cleared on end.
    seen: SeenEvents,

    /// Injected expected-duration budgets for delay detection.
    estimates: LegEstimates,

    pub(crate) notifications: NotificationEngine<S>,
    pub(crate) dispatcher:    Dispatcher,

    next_route_seq: u64,
}

impl<S: KvStore> RouteTracker<S> {
    pub(crate) fn from_parts(
        config:        TrackerConfig,
        estimates:     LegEstimates,
        notifications: NotificationEngine<S>,
        dispatcher:    Dispatcher,
    ) -> Self {
        Self {
            config,
            route: None,
            last_ended: None,
            seen: SeenEvents::new(),
            estimates,
            notifications,
            dispatcher,
            next_route_seq: 1,
        }
    }

    // ── Route lifecycle ───────────────────────────────────────────────────

    /// Begin a trip.  Any route already active is ended first — a state
    /// transition, not an error; observers see the `None` publish before
    /// the new route.  All stops start `Pending`.
    pub fn start_route(
        &mut self,
        driver:      DriverId,
        driver_name: impl Into<String>,
        direction:   Direction,
        stops:       Vec<Stop>,
        started_at:  Timestamp,
    ) -> &Route {
        if self.route.is_some() {
            info!("active route replaced by a new start");
            self.end_route();
        }

        let id = RouteId(self.next_route_seq);
        self.next_route_seq += 1;

        let route = self.route.insert(Route::new(
            id,
            driver,
            driver_name,
            direction,
            stops,
            started_at,
        ));
        info!("route {} started with {} stops", route.id, route.stops().len());
        self.dispatcher.publish_route(Some(&*route));
        &*route
    }

    /// End the active trip.  Returns `false` (and publishes nothing) when
    /// there was nothing to end.  Effective immediately: any update arriving
    /// after this is a no-op because the active slot is cleared.
    pub fn end_route(&mut self) -> bool {
        let Some(mut route) = self.route.take() else {
            return false;
        };
        route.deactivate();
        info!("route {} ended", route.id);
        self.last_ended = Some(route);
        self.seen.clear();
        self.dispatcher.publish_route(None);
        true
    }

    pub fn active_route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// The most recently ended route, if any.  Inactive by construction.
    pub fn last_ended_route(&self) -> Option<&Route> {
        self.last_ended.as_ref()
    }

    // ── Location updates ──────────────────────────────────────────────────

    /// Apply one position fix from the feed.
    ///
    /// Silent no-op without an active route (the feed may outlive a trip by
    /// a few fixes; that is normal, not an error).  Otherwise: record the
    /// fix, evaluate proximity against the next pending stop, notify the
    /// stop's guardian for each qualifying event, and publish the updated
    /// snapshot.  Synchronous and bounded — nothing here blocks on storage
    /// or delivery.
    pub fn update_location(&mut self, coordinate: Coordinate, at: Timestamp) {
        let Some(route) = self.route.as_mut() else {
            debug!("location update ignored: no active route");
            return;
        };
        route.record_fix(coordinate, at);

        let events = evaluate(
            &self.config,
            route,
            &self.estimates,
            &mut self.seen,
            coordinate,
            at,
        );

        for event in &events {
            let Some(stop) = route.stop(event.stop) else {
                continue;
            };
            debug!("{} event for stop {} ({})", event.kind, stop.id, stop.label);

            // Stops without a guardian (the school) update route state but
            // notify nobody.
            let Some(guardian) = stop.guardian else {
                continue;
            };
            let payload = NotificationPayload {
                route: event.route,
                stop:  event.stop,
                kind:  event.kind,
            };
            match self.notifications.notify(guardian, payload, &stop.label, at) {
                NotifyOutcome::Created(n) => self.dispatcher.publish_notification(&n),
                NotifyOutcome::Suppressed => {}
            }
        }

        self.dispatcher.publish_route(self.route.as_ref());
    }

    // ── Stop advancement ──────────────────────────────────────────────────

    /// Advance one stop's status (forward only).
    ///
    /// Publishes the updated route on success.  When the write makes every
    /// stop terminal the trip auto-ends (observers see the route publish,
    /// then the `None`).
    pub fn advance_stop(&mut self, stop: StopId, to: StopStatus) -> TrackResult<()> {
        let Some(route) = self.route.as_mut() else {
            return Err(TrackError::NoActiveRoute);
        };
        route.advance_stop(stop, to)?;
        let finished = route.all_stops_terminal();

        self.dispatcher.publish_route(self.route.as_ref());

        if finished {
            info!("all stops resolved");
            self.end_route();
        }
        Ok(())
    }

    /// Supply (or replace) the expected-duration budget for one stop.
    pub fn set_leg_estimate(&mut self, stop: StopId, expected_ms: i64) {
        self.estimates.set(stop, expected_ms);
    }

    /// Attach a freshly geocoded coordinate to an address-only stop on the
    /// active route and publish the updated snapshot.
    pub fn resolve_stop_coordinate(
        &mut self,
        stop:       StopId,
        coordinate: Coordinate,
    ) -> TrackResult<()> {
        let Some(route) = self.route.as_mut() else {
            return Err(TrackError::NoActiveRoute);
        };
        route.resolve_stop(stop, coordinate)?;
        self.dispatcher.publish_route(self.route.as_ref());
        Ok(())
    }

    // ── Subscriptions ─────────────────────────────────────────────────────

    /// Register an observer for all route publishes and notifications.
    ///
    /// Subscription doubles as the opportunistic retention sweep — `now` is
    /// the caller's clock reading, used only to age out old notifications.
    pub fn subscribe(&mut self, observer: Box<dyn TrackObserver>, now: Timestamp) -> SubscriptionId {
        self.sweep(now);
        self.dispatcher.subscribe(observer)
    }

    /// Like [`subscribe`][Self::subscribe], with the notification channel
    /// scoped to one guardian.
    pub fn subscribe_for_guardian(
        &mut self,
        observer: Box<dyn TrackObserver>,
        guardian: GuardianId,
        now:      Timestamp,
    ) -> SubscriptionId {
        self.sweep(now);
        self.dispatcher.subscribe_for_guardian(observer, guardian)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.dispatcher.unsubscribe(id)
    }

    fn sweep(&mut self, now: Timestamp) {
        let removed = self
            .notifications
            .cleanup_old(now, self.config.retention_max_age_ms);
        if removed > 0 {
            debug!("retention sweep removed {removed} notifications");
        }
    }

    // ── Guardian query surface ────────────────────────────────────────────

    /// Read-only projection of the trip for one guardian.
    pub fn route_info_for(&self, guardian: GuardianId) -> RouteInfo {
        let Some(route) = self.route.as_ref() else {
            return RouteInfo::default();
        };

        let next_stop = route.next_pending_stop_for(guardian).cloned();

        let estimated_arrival_ms = match (&route.current_location, &next_stop) {
            (Some(fix), Some(stop)) => stop.coordinate.map(|c| {
                let meters = fix.coordinate.distance_m(c);
                (meters / self.config.average_speed_mps * 1_000.0) as i64
            }),
            _ => None,
        };

        RouteInfo {
            has_active_route: true,
            driver_location: route.current_location,
            next_stop,
            estimated_arrival_ms,
        }
    }

    // ── Notification surface ──────────────────────────────────────────────

    /// One guardian's inbox, most recent first.
    pub fn notifications_for(&self, guardian: GuardianId) -> Vec<Notification> {
        self.notifications.for_guardian(guardian)
    }

    pub fn unread_count(&self, guardian: GuardianId) -> usize {
        self.notifications.unread_count(guardian)
    }

    /// Guardian-scoped; another guardian's id is a `false` no-op.
    pub fn mark_notification_read(&mut self, id: NotificationId, guardian: GuardianId) -> bool {
        self.notifications.mark_as_read(id, guardian)
    }

    /// Guardian-scoped; another guardian's id is a `false` no-op.
    pub fn delete_notification(&mut self, id: NotificationId, guardian: GuardianId) -> bool {
        self.notifications.delete(id, guardian)
    }
}
