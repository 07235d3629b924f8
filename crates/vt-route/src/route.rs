//! The `Route` aggregate — one van trip.

use vt_core::{Coordinate, Direction, DriverId, GuardianId, RouteId, StopId, Timestamp};

use crate::error::{RouteError, RouteResult};
use crate::stop::{Stop, StopStatus};

// ── PositionFix ───────────────────────────────────────────────────────────────

/// The latest known driver position with its feed timestamp.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionFix {
    pub coordinate: Coordinate,
    pub at:         Timestamp,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// One active van trip: an ordered stop list plus live position.
///
/// Stop order is fixed at creation and never changes, regardless of how the
/// individual statuses advance.  Mutation happens only through the methods
/// here, which the tracker in `vt-track` calls — observers receive `&Route`
/// and must treat it as a read-only snapshot.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub id:          RouteId,
    pub driver:      DriverId,
    pub driver_name: String,
    pub direction:   Direction,

    /// Planned stops in visiting order.
    stops: Vec<Stop>,

    /// Latest known driver position; `None` before the first update.
    pub current_location: Option<PositionFix>,

    pub started_at: Timestamp,
    pub is_active:  bool,
}

impl Route {
    /// Create an active route with every stop reset to `Pending`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if two stops share an id.
    pub fn new(
        id:          RouteId,
        driver:      DriverId,
        driver_name: impl Into<String>,
        direction:   Direction,
        mut stops:   Vec<Stop>,
        started_at:  Timestamp,
    ) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<StopId> = stops.iter().map(|s| s.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "stop ids must be unique within a route"
        );
        for stop in &mut stops {
            stop.status = StopStatus::Pending;
        }
        Self {
            id,
            driver,
            driver_name: driver_name.into(),
            direction,
            stops,
            current_location: None,
            started_at,
            is_active: true,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// All stops in their original visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == id)
    }

    /// The first stop in visiting order that is still `Pending` — the
    /// proximity evaluator's target.
    pub fn next_pending_stop(&self) -> Option<&Stop> {
        self.stops.iter().find(|s| s.status == StopStatus::Pending)
    }

    /// The first pending stop belonging to `guardian` — the guardian
    /// projection's "next stop".
    pub fn next_pending_stop_for(&self, guardian: GuardianId) -> Option<&Stop> {
        self.stops
            .iter()
            .find(|s| s.status == StopStatus::Pending && s.guardian == Some(guardian))
    }

    /// `true` once every stop has reached its terminal status.
    pub fn all_stops_terminal(&self) -> bool {
        self.stops.iter().all(|s| s.status.is_terminal())
    }

    // ── Mutation (tracker-only) ───────────────────────────────────────────

    /// Record a location update.
    pub fn record_fix(&mut self, coordinate: Coordinate, at: Timestamp) {
        self.current_location = Some(PositionFix { coordinate, at });
    }

    /// Advance one stop's status.
    ///
    /// Rejected (state unchanged) when the stop is unknown or the write is
    /// not a forward step.
    pub fn advance_stop(&mut self, id: StopId, to: StopStatus) -> RouteResult<()> {
        let stop = self
            .stops
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RouteError::UnknownStop(id))?;

        if !stop.status.can_advance_to(to) {
            return Err(RouteError::InvalidTransition {
                stop: id,
                from: stop.status,
                to,
            });
        }
        stop.status = to;
        Ok(())
    }

    /// Fill in a stop's coordinate resolved after the trip started
    /// (geocoded address).  From then on the stop can produce proximity and
    /// arrival events, not just delays.
    pub fn resolve_stop(&mut self, id: StopId, coordinate: Coordinate) -> RouteResult<()> {
        let stop = self
            .stops
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RouteError::UnknownStop(id))?;
        stop.resolve_coordinate(coordinate);
        Ok(())
    }

    /// Mark the trip over.  Idempotent.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
