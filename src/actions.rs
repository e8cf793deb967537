use serde::{Deserialize, Serialize};

use crate::state::Location;

/// One step's choice: carry a passenger between two zones, or sit out the
/// hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// No ride this step; the driver waits one hour at the current zone.
    Idle,
    Trip { pickup: Location, dropoff: Location },
}

impl Action {
    /// Panics if pickup and dropoff coincide.
    pub fn trip(pickup: Location, dropoff: Location) -> Self {
        assert!(
            pickup != dropoff,
            "trip pickup and dropoff must differ, got {pickup:?} -> {dropoff:?}"
        );
        Action::Trip { pickup, dropoff }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Action::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_keeps_endpoints() {
        let action = Action::trip(Location::B, Location::C);
        assert_eq!(
            action,
            Action::Trip {
                pickup: Location::B,
                dropoff: Location::C
            }
        );
        assert!(!action.is_idle());
        assert!(Action::Idle.is_idle());
    }

    #[test]
    #[should_panic(expected = "must differ")]
    fn test_trip_rejects_equal_endpoints() {
        Action::trip(Location::D, Location::D);
    }
}
