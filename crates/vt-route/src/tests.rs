//! Unit tests for the route aggregate and roster loader.

use vt_core::{Coordinate, Direction, DriverId, GuardianId, RouteId, StopId, Timestamp};

use crate::error::RouteError;
use crate::route::Route;
use crate::stop::{Stop, StopStatus};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn student(id: u32, guardian: u64) -> Stop {
    Stop::new(
        StopId(id),
        format!("Student {id}"),
        Some(Coordinate::new(30.69 + id as f64 * 0.01, -88.04)),
        Some(GuardianId(guardian)),
    )
}

fn school(id: u32) -> Stop {
    Stop::new(StopId(id), "School", Some(Coordinate::new(30.75, -88.05)), None)
}

fn three_stop_route() -> Route {
    Route::new(
        RouteId(1),
        DriverId(7),
        "Pat",
        Direction::ToSchool,
        vec![student(0, 100), student(1, 101), school(2)],
        Timestamp::ZERO,
    )
}

// ── Status machine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn forward_steps_allowed() {
        assert!(StopStatus::Pending.can_advance_to(StopStatus::PickedUp));
        assert!(StopStatus::PickedUp.can_advance_to(StopStatus::DroppedOff));
        // Forward skip covers a combined pickup-and-drop at one point.
        assert!(StopStatus::Pending.can_advance_to(StopStatus::DroppedOff));
    }

    #[test]
    fn regression_and_same_state_rejected() {
        assert!(!StopStatus::PickedUp.can_advance_to(StopStatus::Pending));
        assert!(!StopStatus::DroppedOff.can_advance_to(StopStatus::PickedUp));
        assert!(!StopStatus::Pending.can_advance_to(StopStatus::Pending));
    }

    #[test]
    fn advance_stop_is_monotonic() {
        let mut route = three_stop_route();
        route.advance_stop(StopId(0), StopStatus::PickedUp).unwrap();
        route.advance_stop(StopId(0), StopStatus::DroppedOff).unwrap();

        let err = route
            .advance_stop(StopId(0), StopStatus::Pending)
            .unwrap_err();
        assert!(matches!(
            err,
            RouteError::InvalidTransition { stop: StopId(0), from: StopStatus::DroppedOff, to: StopStatus::Pending }
        ));
        // Rejection leaves state unchanged.
        assert_eq!(route.stop(StopId(0)).unwrap().status, StopStatus::DroppedOff);
    }

    #[test]
    fn stops_advance_independently() {
        let mut route = three_stop_route();
        // Stop 1 before stop 0 — allowed by design.
        route.advance_stop(StopId(1), StopStatus::PickedUp).unwrap();
        assert_eq!(route.stop(StopId(0)).unwrap().status, StopStatus::Pending);
        assert_eq!(route.stop(StopId(1)).unwrap().status, StopStatus::PickedUp);
    }

    #[test]
    fn unknown_stop_rejected() {
        let mut route = three_stop_route();
        let err = route
            .advance_stop(StopId(99), StopStatus::PickedUp)
            .unwrap_err();
        assert!(matches!(err, RouteError::UnknownStop(StopId(99))));
    }
}

// ── Route aggregate ───────────────────────────────────────────────────────────

#[cfg(test)]
mod route_tests {
    use super::*;

    #[test]
    fn new_route_resets_statuses_and_is_active() {
        let mut dirty = student(0, 100);
        dirty.status = StopStatus::DroppedOff;
        let route = Route::new(
            RouteId(9),
            DriverId(1),
            "Pat",
            Direction::ToHome,
            vec![dirty, student(1, 101)],
            Timestamp(5_000),
        );
        assert!(route.is_active);
        assert!(route.current_location.is_none());
        assert!(route.stops().iter().all(|s| s.status == StopStatus::Pending));
    }

    #[test]
    fn stop_order_fixed_regardless_of_status() {
        let mut route = three_stop_route();
        route.advance_stop(StopId(1), StopStatus::DroppedOff).unwrap();
        let ids: Vec<StopId> = route.stops().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![StopId(0), StopId(1), StopId(2)]);
    }

    #[test]
    fn next_pending_follows_visiting_order() {
        let mut route = three_stop_route();
        assert_eq!(route.next_pending_stop().unwrap().id, StopId(0));

        route.advance_stop(StopId(0), StopStatus::PickedUp).unwrap();
        assert_eq!(route.next_pending_stop().unwrap().id, StopId(1));

        // Skipping ahead: stop 2 done, stop 1 still pending → target is 1.
        route.advance_stop(StopId(2), StopStatus::DroppedOff).unwrap();
        assert_eq!(route.next_pending_stop().unwrap().id, StopId(1));
    }

    #[test]
    fn next_pending_for_guardian() {
        let route = three_stop_route();
        assert_eq!(
            route.next_pending_stop_for(GuardianId(101)).unwrap().id,
            StopId(1)
        );
        assert!(route.next_pending_stop_for(GuardianId(999)).is_none());
    }

    #[test]
    fn all_stops_terminal() {
        let mut route = three_stop_route();
        assert!(!route.all_stops_terminal());
        for id in 0..3 {
            route.advance_stop(StopId(id), StopStatus::DroppedOff).unwrap();
        }
        assert!(route.all_stops_terminal());
    }

    #[test]
    fn resolve_stop_fills_missing_coordinate() {
        let mut route = Route::new(
            RouteId(1),
            DriverId(7),
            "Pat",
            Direction::ToSchool,
            vec![Stop::new(StopId(0), "New Enrollee", None, Some(GuardianId(100)))],
            Timestamp::ZERO,
        );
        assert!(route.stop(StopId(0)).unwrap().coordinate.is_none());

        let geocoded = Coordinate::new(30.70, -88.04);
        route.resolve_stop(StopId(0), geocoded).unwrap();
        assert_eq!(route.stop(StopId(0)).unwrap().coordinate, Some(geocoded));

        let err = route.resolve_stop(StopId(9), geocoded).unwrap_err();
        assert!(matches!(err, RouteError::UnknownStop(StopId(9))));
    }

    #[test]
    fn record_fix_updates_location() {
        let mut route = three_stop_route();
        let pos = Coordinate::new(30.70, -88.04);
        route.record_fix(pos, Timestamp(1_000));
        let fix = route.current_location.unwrap();
        assert_eq!(fix.coordinate, pos);
        assert_eq!(fix.at, Timestamp(1_000));
    }
}

// ── Roster loader ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::loader::load_stops_reader;

    const ROSTER: &str = "\
stop_id,label,lat,lon,guardian_id
0,Ava M.,30.6954,-88.0399,100
1,Ben K.,30.7012,-88.0451,101
2,Riverside Elementary,30.7104,-88.0523,
";

    #[test]
    fn loads_ordered_roster() {
        let stops = load_stops_reader(Cursor::new(ROSTER)).unwrap();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].id, StopId(0));
        assert_eq!(stops[0].label, "Ava M.");
        assert_eq!(stops[0].guardian, Some(GuardianId(100)));
        assert_eq!(stops[2].guardian, None, "school row has no guardian");
        assert!(stops.iter().all(|s| s.status == StopStatus::Pending));
    }

    #[test]
    fn unresolved_coordinate_loads_as_none() {
        let csv = "\
stop_id,label,lat,lon,guardian_id
0,New Enrollee,,,102
";
        let stops = load_stops_reader(Cursor::new(csv)).unwrap();
        assert!(stops[0].coordinate.is_none());
    }

    #[test]
    fn half_filled_coordinate_rejected() {
        let csv = "\
stop_id,label,lat,lon,guardian_id
0,Broken,30.69,,102
";
        let err = load_stops_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RouteError::Parse(_)));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let csv = "\
stop_id,label,lat,lon,guardian_id
not-a-number,Broken,30.69,-88.04,102
";
        let err = load_stops_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RouteError::Parse(_)));
    }
}
