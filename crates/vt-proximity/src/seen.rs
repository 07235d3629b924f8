//! Per-stop memory of already-fired event kinds.

use rustc_hash::FxHashMap;

use vt_core::{EventKind, StopId};

/// Which event kinds have already fired for each stop of the active route.
///
/// This is the in-memory half of the dedup guarantee: while the van lingers
/// inside a threshold, repeated evaluations of the same kind are filtered
/// here before any notification machinery runs.  (The notification engine's
/// structural id is the second, restart-surviving half.)
///
/// Scoped to one route — the tracker clears it whenever a route ends.
#[derive(Default, Debug)]
pub struct SeenEvents {
    fired: FxHashMap<StopId, u8>,
}

impl SeenEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Has `kind` already fired for `stop`?
    #[inline]
    pub fn already_fired(&self, stop: StopId, kind: EventKind) -> bool {
        self.fired
            .get(&stop)
            .is_some_and(|bits| bits & bit(kind) != 0)
    }

    /// Record that `kind` fired for `stop`.
    #[inline]
    pub fn mark(&mut self, stop: StopId, kind: EventKind) {
        *self.fired.entry(stop).or_default() |= bit(kind);
    }

    /// Forget everything — called when the route ends.
    pub fn clear(&mut self) {
        self.fired.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

#[inline]
fn bit(kind: EventKind) -> u8 {
    match kind {
        EventKind::Proximity => 0b001,
        EventKind::Arrival   => 0b010,
        EventKind::Delay     => 0b100,
    }
}
