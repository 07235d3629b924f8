//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` so
//! loaders and stores can construct ids from raw columns; everything else
//! should treat the value as opaque.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// One van trip.  Assigned from a per-tracker monotonic counter.
    pub struct RouteId(u64);
}

typed_id! {
    /// One planned pickup/drop-off point, unique within a route.
    pub struct StopId(u32);
}

typed_id! {
    /// The driver running a route.
    pub struct DriverId(u64);
}

typed_id! {
    /// A notification recipient associated with one or more stops.
    pub struct GuardianId(u64);
}

typed_id! {
    /// A stored notification record.
    ///
    /// Values are produced only by the deduplicating derivation in
    /// `vt-notify` — a hash of (route, stop, kind, time bucket) — so two
    /// evaluations of the same underlying event share one id.
    pub struct NotificationId(u64);
}
