//! The proximity decision function.

use vt_core::{Coordinate, EventKind, Timestamp, TrackerConfig};
use vt_route::Route;

use crate::estimate::LegEstimates;
use crate::event::ProximityEvent;
use crate::seen::SeenEvents;

/// Decide which event kinds have newly become true for the route's next
/// pending stop, given a fresh driver position.
///
/// Marks every returned event in `seen`, so re-evaluating the same state
/// yields nothing — each kind fires at most once per (route, stop).
///
/// Rules:
/// - the target is the first stop in visiting order still `Pending`; with
///   no pending stop there is nothing to evaluate;
/// - `Proximity` fires within `config.proximity_radius_m`, `Arrival` within
///   `config.arrival_radius_m`.  Both can fire on one update when the first
///   fix is already inside the arrival radius;
/// - `Delay` fires when elapsed time since route start exceeds the injected
///   expected duration for the target stop.  It is the only kind a stop
///   without a resolved coordinate can produce.
pub fn evaluate(
    config:    &TrackerConfig,
    route:     &Route,
    estimates: &LegEstimates,
    seen:      &mut SeenEvents,
    position:  Coordinate,
    now:       Timestamp,
) -> Vec<ProximityEvent> {
    let Some(target) = route.next_pending_stop() else {
        return Vec::new();
    };
    let stop_id = target.id;
    let mut events = Vec::new();

    // ── Distance-based kinds — need a resolved stop coordinate ────────────
    if let Some(stop_coord) = target.coordinate {
        let distance = position.distance_m(stop_coord);

        if distance <= config.proximity_radius_m
            && !seen.already_fired(stop_id, EventKind::Proximity)
        {
            seen.mark(stop_id, EventKind::Proximity);
            events.push(ProximityEvent {
                kind:       EventKind::Proximity,
                route:      route.id,
                stop:       stop_id,
                distance_m: Some(distance),
            });
        }

        if distance <= config.arrival_radius_m
            && !seen.already_fired(stop_id, EventKind::Arrival)
        {
            seen.mark(stop_id, EventKind::Arrival);
            events.push(ProximityEvent {
                kind:       EventKind::Arrival,
                route:      route.id,
                stop:       stop_id,
                distance_m: Some(distance),
            });
        }
    }

    // ── Delay — purely time-based ─────────────────────────────────────────
    if let Some(expected_ms) = estimates.get(stop_id) {
        let elapsed = now.saturating_elapsed_since(route.started_at);
        if elapsed > expected_ms && !seen.already_fired(stop_id, EventKind::Delay) {
            seen.mark(stop_id, EventKind::Delay);
            events.push(ProximityEvent {
                kind:       EventKind::Delay,
                route:      route.id,
                stop:       stop_id,
                distance_m: target.coordinate.map(|c| position.distance_m(c)),
            });
        }
    }

    events
}
