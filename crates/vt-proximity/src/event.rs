//! The evaluator's output type.

use vt_core::{EventKind, RouteId, StopId};

/// One qualifying event: a fact about the trip that has just become true
/// for a particular stop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProximityEvent {
    pub kind:  EventKind,
    pub route: RouteId,
    pub stop:  StopId,

    /// Distance to the stop at evaluation time.  `None` for delay events on
    /// stops without a resolved coordinate.
    pub distance_m: Option<f64>,
}
