//! school-run — end-to-end demo of the vantrack engine.
//!
//! Simulates one morning trip: a van leaves the depot, picks up two
//! students, and arrives at school.  A console observer prints every route
//! publish and notification; a fake push transport shows the best-effort
//! delivery channel (it goes offline halfway through the run and the
//! tracker never notices).

use std::io::Cursor;

use anyhow::Result;
use tracing::Level;

use vt_core::{Coordinate, Direction, DriverId, GuardianId, StopId, Timestamp};
use vt_dispatch::{ObserverError, PushError, PushTransport, TrackObserver};
use vt_notify::Notification;
use vt_proximity::LegEstimates;
use vt_route::{Route, StopStatus, load_stops_reader};
use vt_sim::{MovementSimulator, PositionSource};
use vt_track::TrackerBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const DRIVER:            DriverId = DriverId(7);
const TICK_INTERVAL_MS:  i64      = 2_000; // one fix every 2 s
const STEPS_PER_LEG:     u32      = 12;

// Depot and stops along a straight run north through midtown Mobile, AL.
const DEPOT:  Coordinate = Coordinate { lat: 30.6650, lon: -88.0399 };
const AVA:    Coordinate = Coordinate { lat: 30.6954, lon: -88.0399 };
const BEN:    Coordinate = Coordinate { lat: 30.7254, lon: -88.0399 };
const SCHOOL: Coordinate = Coordinate { lat: 30.7554, lon: -88.0399 };

// ── Stop roster ───────────────────────────────────────────────────────────────

// Same shape a deployment would load from disk; row order = visiting order.
const ROSTER_CSV: &str = "\
stop_id,label,lat,lon,guardian_id
0,Ava M.,30.6954,-88.0399,100
1,Ben K.,30.7254,-88.0399,101
2,Riverside Elementary,30.7554,-88.0399,
";

// ── Observers ─────────────────────────────────────────────────────────────────

/// Prints route publishes and notifications as they happen.
struct ConsoleObserver;

impl TrackObserver for ConsoleObserver {
    fn on_route(&mut self, route: Option<&Route>) -> Result<(), ObserverError> {
        match route {
            Some(r) => {
                if let Some(fix) = &r.current_location {
                    println!("  [route] {} at {} ({})", r.id, fix.coordinate, fix.at);
                }
            }
            None => println!("  [route] tracking ended"),
        }
        Ok(())
    }

    fn on_notification(&mut self, n: &Notification) -> Result<(), ObserverError> {
        println!("  [notify] {} -> {}: {}", n.id, n.guardian, n.message);
        Ok(())
    }
}

/// A push channel that drops offline after a few deliveries — the tracker
/// keeps running regardless.
struct FlakyPush {
    deliveries_left: usize,
}

impl PushTransport for FlakyPush {
    fn deliver(&mut self, n: &Notification) -> Result<(), PushError> {
        if self.deliveries_left == 0 {
            return Err(PushError::Offline);
        }
        self.deliveries_left -= 1;
        println!("  [push]  delivered {} ({})", n.id, n.title);
        Ok(())
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let stops = load_stops_reader(Cursor::new(ROSTER_CSV))?;
    let start_at = Timestamp::from_unix_secs(1_754_000_000);

    // Leg budgets: generous, so the delay path stays quiet on a normal run.
    let estimates = LegEstimates::new()
        .with(StopId(0), 10 * 60 * 1_000)
        .with(StopId(1), 20 * 60 * 1_000)
        .with(StopId(2), 30 * 60 * 1_000);

    let mut tracker = TrackerBuilder::new()
        .estimates(estimates)
        .push(FlakyPush { deliveries_left: 2 })
        .build();
    tracker.subscribe(Box::new(ConsoleObserver), start_at);

    let route = tracker.start_route(DRIVER, "Pat", Direction::ToSchool, stops, start_at);
    println!("started {} with {} stops", route.id, route.stops().len());

    // ── Drive the trip ────────────────────────────────────────────────────
    let mut feed = MovementSimulator::new(
        vec![DEPOT, AVA, BEN, SCHOOL],
        TICK_INTERVAL_MS,
        STEPS_PER_LEG,
        start_at,
    )?;

    while let Some(fix) = feed.next_fix() {
        tracker.update_location(fix.coordinate, fix.at);

        // The driver confirms a pickup whenever the van is at the curb.
        let curbside = tracker.active_route().and_then(|r| {
            r.next_pending_stop().and_then(|stop| {
                stop.coordinate
                    .is_some_and(|c| c.distance_m(fix.coordinate) < 1.0)
                    .then_some((stop.id, stop.guardian))
            })
        });
        if let Some((stop_id, guardian)) = curbside {
            let status = if guardian.is_some() {
                StopStatus::PickedUp
            } else {
                // The school: everyone gets off.
                StopStatus::DroppedOff
            };
            tracker.advance_stop(stop_id, status)?;
            println!("  [stop]  {stop_id} -> {status}");
        }
    }

    // Arrived: drop the students off, which auto-ends the route.
    for stop in [StopId(0), StopId(1)] {
        tracker.advance_stop(stop, StopStatus::DroppedOff)?;
    }
    assert!(tracker.active_route().is_none(), "route should have auto-ended");

    // ── Guardian views ────────────────────────────────────────────────────
    for guardian in [GuardianId(100), GuardianId(101)] {
        let info = tracker.route_info_for(guardian);
        println!(
            "guardian {guardian}: active={} unread={}",
            info.has_active_route,
            tracker.unread_count(guardian)
        );
        for n in tracker.notifications_for(guardian) {
            println!("    inbox: [{}] {}", n.kind(), n.message);
        }
    }

    Ok(())
}
