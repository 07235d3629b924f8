//! Stops and their forward-only status machine.

use std::fmt;

use vt_core::{Coordinate, GuardianId, StopId};

// ── StopStatus ────────────────────────────────────────────────────────────────

/// Per-stop progress, strictly forward: `Pending → PickedUp → DroppedOff`.
///
/// Stops advance independently of one another — marking one student picked
/// up does not require earlier stops to be resolved — but a single stop can
/// never regress, and re-applying the current status is rejected too so a
/// replayed UI action surfaces instead of silently "succeeding".
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopStatus {
    Pending,
    PickedUp,
    DroppedOff,
}

impl StopStatus {
    /// `true` when moving from `self` to `next` is a legal forward step or
    /// forward skip (`Pending → DroppedOff` covers a combined
    /// pickup-and-drop at the same point).
    #[inline]
    pub fn can_advance_to(self, next: StopStatus) -> bool {
        next > self
    }

    /// Terminal state — nothing can follow `DroppedOff`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self == StopStatus::DroppedOff
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StopStatus::Pending    => "pending",
            StopStatus::PickedUp   => "picked_up",
            StopStatus::DroppedOff => "dropped_off",
        }
    }
}

impl fmt::Display for StopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Stop ──────────────────────────────────────────────────────────────────────

/// One planned pickup/drop-off point: a student's address or the school.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Stable identifier, unique within the route.
    pub id: StopId,

    /// Student or school name, used in notification text.
    pub label: String,

    /// `None` for address-only stops whose coordinate has not been resolved
    /// yet.  Such stops can still produce delay events, never proximity or
    /// arrival.
    pub coordinate: Option<Coordinate>,

    /// The notification recipient for this stop.  `None` for the school
    /// stop — events there update route state but notify nobody.
    pub guardian: Option<GuardianId>,

    pub status: StopStatus,
}

impl Stop {
    /// A fresh `Pending` stop.
    pub fn new(
        id:         StopId,
        label:      impl Into<String>,
        coordinate: Option<Coordinate>,
        guardian:   Option<GuardianId>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            coordinate,
            guardian,
            status: StopStatus::Pending,
        }
    }

    /// Fill in a coordinate resolved after roster creation (geocoded
    /// address).  Overwriting an existing coordinate is allowed — a better
    /// fix may arrive later.
    pub fn resolve_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinate = Some(coordinate);
    }
}
