//! Wall-clock time model.
//!
//! # Design
//!
//! Time is an explicit `Timestamp` (unix milliseconds) passed into every
//! operation that needs it.  The engine never reads the system clock: the
//! position feed stamps its fixes, the caller stamps status changes, and
//! tests supply exact values.  Integer milliseconds keep bucket arithmetic
//! (used by notification dedup) exact — no floating-point drift.

use std::fmt;

/// An absolute instant, unix milliseconds.
///
/// `i64` milliseconds cover ±292 million years, so overflow is not a
/// practical concern; the arithmetic helpers still saturate rather than
/// wrap to keep a bad feed timestamp from corrupting comparisons.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Construct from unix seconds.
    #[inline]
    pub fn from_unix_secs(secs: i64) -> Timestamp {
        Timestamp(secs.saturating_mul(1_000))
    }

    /// The instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset_ms(self, ms: i64) -> Timestamp {
        Timestamp(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self`; zero if `earlier` is
    /// in the future (a feed delivering out-of-order fixes must not produce
    /// negative elapsed time).
    #[inline]
    pub fn saturating_elapsed_since(self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0).max(0)
    }

    /// Coarse time bucket index for a bucket of `width_ms` milliseconds.
    ///
    /// Two instants in the same bucket produce the same index — the basis
    /// of the structural notification dedup.  `width_ms` must be positive.
    #[inline]
    pub fn bucket(self, width_ms: i64) -> i64 {
        debug_assert!(width_ms > 0, "bucket width must be positive");
        self.0.div_euclid(width_ms)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}ms", self.0)
    }
}
