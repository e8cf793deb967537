use log::debug;
use rand::Rng;
use rand::seq::index;
use rand_distr::{Distribution, Poisson};
use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::config::Config;
use crate::spaces::{IDLE_INDEX, TRIP_ACTION_COUNT};
use crate::state::State;

/// Ride offers available to the driver this step, as parallel lists of
/// action-space indices and resolved actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBatch {
    pub indices: Vec<usize>,
    pub actions: Vec<Action>,
}

/// Draw this step's ride offers for the state's zone.
///
/// The offer count is Poisson with the zone's request rate, clamped to
/// `config.max_requests`; offers are distinct trips sampled without
/// replacement from the action space, so the idle slot at index 0 is never
/// drawn. The idle action is always available and appended last with its
/// own index.
pub fn generate<R: Rng + ?Sized>(
    state: &State,
    action_space: &[Action],
    config: &Config,
    rng: &mut R,
) -> RequestBatch {
    let rate = config.request_rates[state.location.index()];
    let poisson = Poisson::new(rate).expect("request rate must be positive and finite");
    let drawn = poisson.sample(rng) as usize;
    let count = drawn.min(config.max_requests);
    assert!(
        count <= TRIP_ACTION_COUNT,
        "cannot offer {count} distinct trips, only {TRIP_ACTION_COUNT} exist"
    );
    debug!(
        "zone {:?} drew {drawn} requests, offering {count}",
        state.location
    );

    let mut indices: Vec<usize> = index::sample(rng, TRIP_ACTION_COUNT, count)
        .iter()
        .map(|i| i + 1) // shift past the idle slot
        .collect();
    let mut actions: Vec<Action> = indices.iter().map(|&i| action_space[i]).collect();

    indices.push(IDLE_INDEX);
    actions.push(Action::Idle);

    RequestBatch { indices, actions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::spaces::action_space;
    use crate::state::Location;

    fn batch_for(location: Location, seed: u64) -> RequestBatch {
        let space = action_space();
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(seed);
        generate(
            &State::new(location, 9, 4),
            &space,
            &config,
            &mut rng,
        )
    }

    #[test]
    fn test_idle_is_always_offered_exactly_once() {
        for location in [Location::A, Location::B, Location::C, Location::D, Location::E] {
            for seed in 0..20 {
                let batch = batch_for(location, seed);
                let idles = batch.actions.iter().filter(|a| a.is_idle()).count();
                assert_eq!(idles, 1);
                assert_eq!(*batch.actions.last().unwrap(), Action::Idle);
                assert_eq!(*batch.indices.last().unwrap(), IDLE_INDEX);
            }
        }
    }

    #[test]
    fn test_indices_resolve_to_actions() {
        let space = action_space();
        for seed in 0..20 {
            let batch = batch_for(Location::B, seed);
            assert_eq!(batch.indices.len(), batch.actions.len());
            for (index, action) in batch.indices.iter().zip(&batch.actions) {
                assert_eq!(space[*index], *action);
            }
        }
    }

    #[test]
    fn test_offers_are_distinct_and_capped() {
        let config = Config::default();
        for seed in 0..50 {
            let batch = batch_for(Location::B, seed);
            assert!(batch.actions.len() <= config.max_requests + 1);
            let mut indices = batch.indices.clone();
            indices.sort_unstable();
            indices.dedup();
            assert_eq!(indices.len(), batch.indices.len());
        }
    }

    #[test]
    fn test_draws_are_reproducible_under_a_seed() {
        assert_eq!(batch_for(Location::D, 7), batch_for(Location::D, 7));
    }
}
