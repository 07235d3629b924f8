//! CSV stop-roster loader.
//!
//! # CSV format
//!
//! One row per stop, in visiting order.  Empty `lat`/`lon` cells mean the
//! stop's address has not been geocoded yet (the stop is created without a
//! coordinate); an empty `guardian_id` means nobody is notified for that
//! stop (the school row).
//!
//! ```csv
//! stop_id,label,lat,lon,guardian_id
//! 0,Ava M.,30.6954,-88.0399,100
//! 1,Ben K.,30.7012,-88.0451,101
//! 2,Riverside Elementary,30.7104,-88.0523,
//! ```
//!
//! Row order in the file is the visiting order of the route.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use vt_core::{Coordinate, GuardianId, StopId};

use crate::error::{RouteError, RouteResult};
use crate::stop::Stop;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    stop_id:     u32,
    label:       String,
    lat:         Option<f64>,
    lon:         Option<f64>,
    guardian_id: Option<u64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an ordered stop roster from a CSV file.
pub fn load_stops_csv(path: &Path) -> RouteResult<Vec<Stop>> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_stops_reader(file)
}

/// Like [`load_stops_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded rosters.
pub fn load_stops_reader<R: Read>(reader: R) -> RouteResult<Vec<Stop>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut stops = Vec::new();

    for result in csv_reader.deserialize::<StopRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;

        // A half-filled coordinate is a roster bug worth rejecting early —
        // silently dropping the latitude would shift the stop to the prime
        // meridian.
        let coordinate = match (row.lat, row.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            (None, None)           => None,
            _ => {
                return Err(RouteError::Parse(format!(
                    "stop {}: lat and lon must both be present or both empty",
                    row.stop_id
                )));
            }
        };

        stops.push(Stop::new(
            StopId(row.stop_id),
            row.label,
            coordinate,
            row.guardian_id.map(GuardianId),
        ));
    }

    Ok(stops)
}
