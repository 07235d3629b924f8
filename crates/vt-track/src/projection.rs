//! The guardian-facing read-only projection of the active route.

use vt_route::{PositionFix, Stop};

/// What one guardian sees of the trip: enough for a "where is the van"
/// screen, nothing they don't need (other families' stops are absent).
#[derive(Clone, Debug, Default)]
pub struct RouteInfo {
    pub has_active_route: bool,

    /// Latest known driver position, if any fix has arrived.
    pub driver_location: Option<PositionFix>,

    /// This guardian's next pending stop (a snapshot copy).
    pub next_stop: Option<Stop>,

    /// Straight-line travel-time estimate to `next_stop`, in milliseconds,
    /// from the configured average speed.  A projection for display only —
    /// proximity decisions never use it.
    pub estimated_arrival_ms: Option<i64>,
}
