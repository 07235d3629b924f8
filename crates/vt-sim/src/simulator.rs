//! Waypoint-interpolating movement simulation.

use vt_core::{Coordinate, Timestamp};
use vt_route::PositionFix;

use crate::error::{SimError, SimResult};
use crate::source::PositionSource;

/// Emits linearly-interpolated fixes along a fixed waypoint list.
///
/// Each call to `next_fix` advances `1 / steps_per_leg` of the current leg
/// and stamps the fix `tick_interval_ms` after the previous one.  The first
/// fix is the first waypoint at `start_at`; the final step of every leg
/// lands exactly on the leg's end waypoint (no floating-point drift at stop
/// coordinates).  After the last waypoint the feed is exhausted.
///
/// Deterministic: the same construction always yields the same fix
/// sequence.
#[derive(Debug)]
pub struct MovementSimulator {
    waypoints:        Vec<Coordinate>,
    tick_interval_ms: i64,
    steps_per_leg:    u32,
    start_at:         Timestamp,

    /// Steps taken so far == fixes emitted.  Position `p` sits on leg
    /// `p / steps_per_leg` at fraction `(p % steps_per_leg) / steps_per_leg`.
    pos:     u64,
    stopped: bool,
}

impl MovementSimulator {
    pub fn new(
        waypoints:        Vec<Coordinate>,
        tick_interval_ms: i64,
        steps_per_leg:    u32,
        start_at:         Timestamp,
    ) -> SimResult<Self> {
        if waypoints.len() < 2 {
            return Err(SimError::Config(format!(
                "need at least 2 waypoints, got {}",
                waypoints.len()
            )));
        }
        if steps_per_leg == 0 {
            return Err(SimError::Config("steps_per_leg must be at least 1".into()));
        }
        if tick_interval_ms <= 0 {
            return Err(SimError::Config(format!(
                "tick interval must be positive, got {tick_interval_ms} ms"
            )));
        }
        Ok(Self {
            waypoints,
            tick_interval_ms,
            steps_per_leg,
            start_at,
            pos: 0,
            stopped: false,
        })
    }

    /// Total fixes this simulator will emit over its full run.
    pub fn total_fixes(&self) -> u64 {
        self.total_steps() + 1
    }

    /// Fixes emitted so far.
    pub fn ticks_emitted(&self) -> u64 {
        self.pos
    }

    /// `true` once the final waypoint has been emitted.
    pub fn is_finished(&self) -> bool {
        self.pos > self.total_steps()
    }

    /// Halt the feed.  Synchronous: every `next_fix` after this returns
    /// `None` until [`reset`][Self::reset].
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Restart from the first waypoint at the original start time.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.stopped = false;
    }

    fn total_steps(&self) -> u64 {
        (self.waypoints.len() as u64 - 1) * self.steps_per_leg as u64
    }

    fn coordinate_at(&self, pos: u64) -> Coordinate {
        if pos >= self.total_steps() {
            return *self.waypoints.last().unwrap();
        }
        let spl = self.steps_per_leg as u64;
        let leg = (pos / spl) as usize;
        let step = pos % spl;

        if step == 0 {
            return self.waypoints[leg];
        }
        let t = step as f64 / spl as f64;
        lerp(self.waypoints[leg], self.waypoints[leg + 1], t)
    }
}

impl PositionSource for MovementSimulator {
    fn next_fix(&mut self) -> Option<PositionFix> {
        if self.stopped || self.is_finished() {
            return None;
        }
        let fix = PositionFix {
            coordinate: self.coordinate_at(self.pos),
            at: self
                .start_at
                .offset_ms(self.pos as i64 * self.tick_interval_ms),
        };
        self.pos += 1;
        Some(fix)
    }
}

fn lerp(a: Coordinate, b: Coordinate, t: f64) -> Coordinate {
    Coordinate::new(a.lat + (b.lat - a.lat) * t, a.lon + (b.lon - a.lon) * t)
}
