use itertools::iproduct;
use strum::IntoEnumIterator;

use crate::clock;
use crate::state::{Location, State};
use crate::{DAYS_PER_WEEK, HOURS_PER_DAY, NUM_LOCATIONS, UInt};

/// Total number of (origin, destination, hour, day) entries.
pub const TABLE_LEN: usize =
    NUM_LOCATIONS * NUM_LOCATIONS * (HOURS_PER_DAY as usize) * (DAYS_PER_WEEK as usize);

/// Hours needed for each (origin, destination, departure hour, departure
/// day) leg. Built externally and read-only; entries with origin equal to
/// destination are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelTimeTable {
    entries: Vec<UInt>,
}

fn slot(origin: usize, destination: usize, hour: usize, day: usize) -> usize {
    ((origin * NUM_LOCATIONS + destination) * HOURS_PER_DAY as usize + hour)
        * DAYS_PER_WEEK as usize
        + day
}

impl TravelTimeTable {
    /// Build a table by evaluating `f` at every entry.
    pub fn from_fn(f: impl Fn(Location, Location, UInt, UInt) -> UInt) -> Self {
        let entries = iproduct!(
            Location::iter(),
            Location::iter(),
            0..HOURS_PER_DAY,
            0..DAYS_PER_WEEK
        )
        .map(|(origin, destination, hour, day)| f(origin, destination, hour, day))
        .collect();
        TravelTimeTable { entries }
    }

    /// Build a table from a flat row-major `[origin][destination][hour][day]`
    /// buffer.
    pub fn from_flat(entries: Vec<UInt>) -> Result<Self, String> {
        if entries.len() != TABLE_LEN {
            return Err(format!(
                "travel table needs {TABLE_LEN} entries, got {}",
                entries.len()
            ));
        }
        Ok(TravelTimeTable { entries })
    }

    /// Build a table from nested `[origin][destination][hour][day]` vectors,
    /// checking the shape at every level.
    pub fn from_nested(nested: Vec<Vec<Vec<Vec<UInt>>>>) -> Result<Self, String> {
        if nested.len() != NUM_LOCATIONS {
            return Err(format!(
                "travel table needs {NUM_LOCATIONS} origins, got {}",
                nested.len()
            ));
        }
        let mut entries = Vec::with_capacity(TABLE_LEN);
        for (origin, destinations) in nested.iter().enumerate() {
            if destinations.len() != NUM_LOCATIONS {
                return Err(format!(
                    "origin {origin}: needs {NUM_LOCATIONS} destinations, got {}",
                    destinations.len()
                ));
            }
            for (destination, hours) in destinations.iter().enumerate() {
                if hours.len() != HOURS_PER_DAY as usize {
                    return Err(format!(
                        "origin {origin}, destination {destination}: needs {HOURS_PER_DAY} hours, got {}",
                        hours.len()
                    ));
                }
                for (hour, days) in hours.iter().enumerate() {
                    if days.len() != DAYS_PER_WEEK as usize {
                        return Err(format!(
                            "origin {origin}, destination {destination}, hour {hour}: needs {DAYS_PER_WEEK} days, got {}",
                            days.len()
                        ));
                    }
                    entries.extend_from_slice(days);
                }
            }
        }
        Ok(TravelTimeTable { entries })
    }

    /// Parse a table from JSON text of the nested shape.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let nested: Vec<Vec<Vec<Vec<UInt>>>> =
            serde_json::from_str(json).map_err(|e| format!("travel table JSON: {e}"))?;
        Self::from_nested(nested)
    }

    /// Hours for one leg departing at the given clock. Panics on an
    /// out-of-range departure time.
    pub fn hours(&self, origin: Location, destination: Location, hour: UInt, day: UInt) -> UInt {
        assert!(
            hour < HOURS_PER_DAY,
            "departure hour {hour} out of range 0..{HOURS_PER_DAY}"
        );
        assert!(
            day < DAYS_PER_WEEK,
            "departure day {day} out of range 0..{DAYS_PER_WEEK}"
        );
        self.entries[slot(
            origin.index(),
            destination.index(),
            hour as usize,
            day as usize,
        )]
    }

    /// Reposition and ride durations for a trip taken from `state`.
    ///
    /// The reposition leg (current zone to pickup) departs at the state's
    /// clock; the ride leg departs after the clock has rolled forward by
    /// the reposition time. Repositioning takes zero hours when the driver
    /// is already at the pickup zone.
    pub fn leg_hours(&self, state: &State, pickup: Location, dropoff: Location) -> (UInt, UInt) {
        let (mut hour, mut day) = (state.hour, state.day);
        let mut reposition = 0;
        if state.location != pickup {
            reposition = self.hours(state.location, pickup, hour, day);
            (hour, day) = clock::advance(hour, day, reposition);
        }
        let ride = self.hours(pickup, dropoff, hour, day);
        (reposition, ride)
    }
}
