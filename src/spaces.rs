use itertools::{Itertools, iproduct};
use strum::IntoEnumIterator;

use crate::actions::Action;
use crate::state::{Location, State};
use crate::{DAYS_PER_WEEK, HOURS_PER_DAY, NUM_LOCATIONS};

/// Index of [`Action::Idle`] in the action space.
pub const IDLE_INDEX: usize = 0;

/// Number of non-idle actions: all ordered pairs of distinct zones.
pub const TRIP_ACTION_COUNT: usize = NUM_LOCATIONS * (NUM_LOCATIONS - 1);

/// Idle first, then every ordered pair of distinct zones in lexicographic
/// order. Request generation indexes into this exact ordering, so the
/// enumeration must never change.
pub fn action_space() -> Vec<Action> {
    let mut actions = vec![Action::Idle];
    actions.extend(
        Location::iter()
            .permutations(2)
            .map(|pair| Action::trip(pair[0], pair[1])),
    );
    actions
}

/// Every (zone, hour, day) triple, zone-major.
pub fn state_space() -> Vec<State> {
    iproduct!(Location::iter(), 0..HOURS_PER_DAY, 0..DAYS_PER_WEEK)
        .map(|(location, hour, day)| State::new(location, hour, day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_space_shape() {
        let actions = action_space();
        assert_eq!(actions.len(), 1 + TRIP_ACTION_COUNT);
        assert_eq!(actions[IDLE_INDEX], Action::Idle);
        assert!(actions.iter().all_unique());
    }

    #[test]
    fn test_action_space_ordering() {
        let actions = action_space();
        assert_eq!(actions[1], Action::trip(Location::A, Location::B));
        assert_eq!(actions[2], Action::trip(Location::A, Location::C));
        assert_eq!(actions[4], Action::trip(Location::A, Location::E));
        assert_eq!(actions[5], Action::trip(Location::B, Location::A));
        assert_eq!(actions[20], Action::trip(Location::E, Location::D));
    }

    #[test]
    fn test_state_space_shape() {
        let states = state_space();
        assert_eq!(
            states.len(),
            NUM_LOCATIONS * (HOURS_PER_DAY * DAYS_PER_WEEK) as usize
        );
        assert_eq!(states[0], State::new(Location::A, 0, 0));
        assert_eq!(states[1], State::new(Location::A, 0, 1));
        assert_eq!(
            states[states.len() - 1],
            State::new(Location::E, HOURS_PER_DAY - 1, DAYS_PER_WEEK - 1)
        );
        assert!(states.iter().all_unique());
    }

    #[test]
    fn test_spaces_are_idempotent() {
        assert_eq!(action_space(), action_space());
        assert_eq!(state_space(), state_space());
    }
}
