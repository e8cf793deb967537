use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use strum::IntoEnumIterator;

use crate::actions::Action;
use crate::config::Config;
use crate::requests::{self, RequestBatch};
use crate::reward;
use crate::spaces;
use crate::state::{Location, State};
use crate::transition;
use crate::travel::TravelTimeTable;
use crate::{Int, UInt};

/// One driver's shift: the precomputed spaces, a seedable RNG, and the
/// running count of travel hours consumed by the caller's stopping rule.
///
/// Concurrent shifts each own an independent instance; the travel table is
/// shared by reference.
#[derive(Debug)]
pub struct CabEnv {
    pub config: Config,
    action_space: Vec<Action>,
    state_space: Vec<State>,
    accum_travel_hours: UInt,
    rng: StdRng,
}

impl CabEnv {
    /// Environment seeded from OS entropy.
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Environment with a reproducible request/reset stream.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        config.validate();
        CabEnv {
            config,
            action_space: spaces::action_space(),
            state_space: spaces::state_space(),
            accum_travel_hours: 0,
            rng,
        }
    }

    /// Start a fresh shift: zero the hours counter and place the driver in
    /// a uniformly drawn zone at hour 0 of day 0. Returns the precomputed
    /// spaces alongside the initial state.
    pub fn reset(&mut self) -> (&[Action], &[State], State) {
        self.accum_travel_hours = 0;
        let starts: Vec<State> = Location::iter().map(|zone| State::new(zone, 0, 0)).collect();
        let initial = *starts.choose(&mut self.rng).expect("at least one zone");
        debug!("shift starts at {initial:?}");
        (&self.action_space, &self.state_space, initial)
    }

    /// Ride offers for the current step; see [`requests::generate`].
    pub fn generate_requests(&mut self, state: &State) -> RequestBatch {
        requests::generate(state, &self.action_space, &self.config, &mut self.rng)
    }

    /// Net payoff of `action` from `state`; see [`reward::compute`].
    pub fn reward(&self, state: &State, action: Action, table: &TravelTimeTable) -> Int {
        reward::compute(state, action, table, &self.config)
    }

    /// Successor state after `action`; the hours spent are added to the
    /// shift counter.
    pub fn next_state(&mut self, state: &State, action: Action, table: &TravelTimeTable) -> State {
        let (next, elapsed) = transition::next(state, action, table);
        self.accum_travel_hours += elapsed;
        debug!("{state:?} --{action:?} ({elapsed}h)--> {next:?}");
        next
    }

    /// Travel hours accumulated since the last [`CabEnv::reset`].
    pub fn accumulated_hours(&self) -> UInt {
        self.accum_travel_hours
    }

    pub fn action_space(&self) -> &[Action] {
        &self.action_space
    }

    pub fn state_space(&self) -> &[State] {
        &self.state_space
    }
}
