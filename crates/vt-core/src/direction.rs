//! Trip direction.

/// Which way the van is running this trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Morning run: pick students up, end at the school.
    ToSchool,
    /// Afternoon run: start at the school, drop students off.
    ToHome,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::ToSchool => "to_school",
            Direction::ToHome   => "to_home",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
