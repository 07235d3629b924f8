//! Injected expected-duration budgets for delay detection.

use rustc_hash::FxHashMap;

use vt_core::StopId;

/// Expected elapsed trip time, per stop, supplied externally (typically by
/// a routing provider when the trip is planned).
///
/// The evaluator only compares against these values — it never estimates
/// durations itself.  A stop with no entry never produces a delay event.
#[derive(Default, Clone, Debug)]
pub struct LegEstimates {
    expected_ms: FxHashMap<StopId, i64>,
}

impl LegEstimates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected milliseconds from route start until the van should
    /// reach `stop`.
    pub fn set(&mut self, stop: StopId, expected_ms: i64) {
        self.expected_ms.insert(stop, expected_ms);
    }

    /// Builder-style variant of [`set`][Self::set].
    pub fn with(mut self, stop: StopId, expected_ms: i64) -> Self {
        self.set(stop, expected_ms);
        self
    }

    pub fn get(&self, stop: StopId) -> Option<i64> {
        self.expected_ms.get(&stop).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.expected_ms.is_empty()
    }
}
