use crate::UInt;
use crate::actions::Action;
use crate::clock;
use crate::state::State;
use crate::travel::TravelTimeTable;

/// Successor state and the hours spent reaching it.
///
/// Idling parks the driver for one hour at the current zone; a trip moves
/// the driver to the dropoff after the reposition and ride legs. The
/// successor is built directly so the clock arithmetic in [`clock`] is
/// never re-validated.
pub fn next(state: &State, action: Action, table: &TravelTimeTable) -> (State, UInt) {
    let (location, elapsed) = match action {
        Action::Idle => (state.location, 1),
        Action::Trip { pickup, dropoff } => {
            let (reposition, ride) = table.leg_hours(state, pickup, dropoff);
            (dropoff, reposition + ride)
        }
    };
    let (hour, day) = clock::advance(state.hour, state.day, elapsed);
    (State { location, hour, day }, elapsed)
}
