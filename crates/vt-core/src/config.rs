//! Tracker configuration.

/// Tunable thresholds for the tracking engine.
///
/// All values are injected — nothing in the engine hard-codes a radius or
/// retention period.  The defaults below are the documented baseline; a
/// deployment typically loads overrides from its settings layer and passes
/// the struct to `TrackerBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerConfig {
    /// Distance at which a "van approaching" event fires.  Default: 500 m.
    pub proximity_radius_m: f64,

    /// Distance at which a "van arrived" event fires.  Default: 50 m.
    pub arrival_radius_m: f64,

    /// Width of the dedup time bucket.  Two evaluations of the same
    /// (route, stop, kind) within one bucket share a notification id.
    /// Default: 10 minutes.
    pub dedup_bucket_ms: i64,

    /// Notifications older than this are removed by the retention sweep.
    /// Default: 7 days.
    pub retention_max_age_ms: i64,

    /// Assumed average van speed for the estimated-arrival projection.
    /// Projection only — proximity decisions never use it.  Default: 8 m/s.
    pub average_speed_mps: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            proximity_radius_m:   500.0,
            arrival_radius_m:     50.0,
            dedup_bucket_ms:      10 * 60 * 1_000,
            retention_max_age_ms: 7 * 24 * 60 * 60 * 1_000,
            average_speed_mps:    8.0,
        }
    }
}
