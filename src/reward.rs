use crate::Int;
use crate::actions::Action;
use crate::config::Config;
use crate::state::State;
use crate::travel::TravelTimeTable;

/// Net payoff of taking `action` from `state`.
///
/// Revenue accrues only while carrying the passenger; the hourly cost
/// accrues for the empty reposition leg as well. Idling costs one hour at
/// the idle rate.
pub fn compute(state: &State, action: Action, table: &TravelTimeTable, config: &Config) -> Int {
    let (pickup, dropoff) = match action {
        Action::Idle => return -config.idle_cost_per_hour,
        Action::Trip { pickup, dropoff } => (pickup, dropoff),
    };
    let (reposition, ride) = table.leg_hours(state, pickup, dropoff);
    config.revenue_per_ride_hour * ride as Int
        - config.idle_cost_per_hour * (reposition + ride) as Int
}
