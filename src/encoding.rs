use crate::actions::Action;
use crate::state::State;
use crate::{DAYS_PER_WEEK, HOURS_PER_DAY, NUM_LOCATIONS};

/// Width of a state feature vector: one-hot zone, hour, day.
pub const STATE_VEC_LEN: usize =
    NUM_LOCATIONS + HOURS_PER_DAY as usize + DAYS_PER_WEEK as usize;

/// Width of a state-action feature vector: the state segments followed by
/// one-hot pickup and dropoff zones.
pub const STATE_ACTION_VEC_LEN: usize = STATE_VEC_LEN + 2 * NUM_LOCATIONS;

/// One-hot feature vector for a state, or `None` when there is no state to
/// encode. Callers probe with absent (terminal) states, so absence is a
/// quiet non-answer rather than an error.
pub fn encode_state(state: Option<&State>) -> Option<Vec<f32>> {
    let state = state?;
    let mut features = vec![0.0; STATE_VEC_LEN];
    features[state.location.index()] = 1.0;
    features[NUM_LOCATIONS + state.hour as usize] = 1.0;
    features[NUM_LOCATIONS + HOURS_PER_DAY as usize + state.day as usize] = 1.0;
    Some(features)
}

/// State encoding followed by one-hot pickup and dropoff zones. Both
/// action segments stay all-zero for [`Action::Idle`].
pub fn encode_state_action(state: Option<&State>, action: Action) -> Option<Vec<f32>> {
    let mut features = encode_state(state)?;
    features.resize(STATE_ACTION_VEC_LEN, 0.0);
    if let Action::Trip { pickup, dropoff } = action {
        features[STATE_VEC_LEN + pickup.index()] = 1.0;
        features[STATE_VEC_LEN + NUM_LOCATIONS + dropoff.index()] = 1.0;
    }
    Some(features)
}
