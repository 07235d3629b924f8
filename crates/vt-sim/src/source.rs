//! The position-feed port.

use vt_route::PositionFix;

/// Anything that can produce a serial stream of position fixes: a live
/// geolocation feed or the [`MovementSimulator`][crate::MovementSimulator].
///
/// `None` means the feed is exhausted (or stopped).  The tracker consumes
/// fixes one at a time and never cares which implementation is behind the
/// trait — the two must be swappable without touching any other component.
pub trait PositionSource {
    fn next_fix(&mut self) -> Option<PositionFix>;
}
