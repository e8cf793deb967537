use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::{DAYS_PER_WEEK, HOURS_PER_DAY, UInt};

/// One of the five zones served by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Location {
    A,
    B,
    C,
    D,
    E,
}

impl Location {
    /// 1-based zone id.
    pub fn id(&self) -> UInt {
        *self as UInt + 1
    }

    /// 0-based slot used by encodings and table lookups.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_id(id: UInt) -> Option<Location> {
        match id {
            1 => Some(Location::A),
            2 => Some(Location::B),
            3 => Some(Location::C),
            4 => Some(Location::D),
            5 => Some(Location::E),
            _ => None,
        }
    }
}

/// Where the driver is and when: zone, hour of day, day of week.
///
/// Immutable value; transitions always build a fresh one. The `day` field
/// can sit above the weekly range on successor states, since the rollover
/// in [`crate::clock`] only wraps it on the hour-carry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub location: Location,
    pub hour: UInt,
    pub day: UInt,
}

impl State {
    /// Panics if hour or day is out of range.
    pub fn new(location: Location, hour: UInt, day: UInt) -> Self {
        assert!(hour < HOURS_PER_DAY, "hour {hour} out of range 0..{HOURS_PER_DAY}");
        assert!(day < DAYS_PER_WEEK, "day {day} out of range 0..{DAYS_PER_WEEK}");
        State { location, hour, day }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_zone_ids_round_trip() {
        for location in Location::iter() {
            assert_eq!(Location::from_id(location.id()), Some(location));
        }
        assert_eq!(Location::from_id(0), None);
        assert_eq!(Location::from_id(6), None);
    }

    #[test]
    fn test_zone_index_is_zero_based() {
        assert_eq!(Location::A.index(), 0);
        assert_eq!(Location::E.index(), 4);
    }

    #[test]
    #[should_panic(expected = "hour 24 out of range")]
    fn test_state_rejects_bad_hour() {
        State::new(Location::A, 24, 0);
    }

    #[test]
    #[should_panic(expected = "day 7 out of range")]
    fn test_state_rejects_bad_day() {
        State::new(Location::A, 0, 7);
    }
}
