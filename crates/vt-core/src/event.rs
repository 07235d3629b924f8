//! Proximity event vocabulary shared by the evaluator and the notification
//! engine.

/// The kinds of qualifying events a location update can produce.
///
/// Each kind fires at most once per (route, stop) — the evaluator's seen-set
/// enforces that in memory and the notification id derivation enforces it
/// structurally.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventKind {
    /// The van is within the proximity radius of the next pending stop.
    Proximity,
    /// The van is within the (much smaller) arrival radius.
    Arrival,
    /// Elapsed trip time exceeded the expected duration for the current leg.
    Delay,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Proximity => "proximity",
            EventKind::Arrival   => "arrival",
            EventKind::Delay     => "delay",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
