use cabenv::{
    UInt,
    config::Config,
    env::CabEnv,
    travel::TravelTimeTable,
};
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ShiftSummary {
    episode: usize,
    steps: UInt,
    hours: UInt,
    total_reward: i32,
}

fn main() {
    env_logger::init();

    let config = match std::fs::read_to_string("cabenv.toml") {
        Ok(raw) => toml::from_str(&raw).expect("cabenv.toml is not a valid config"),
        Err(_) => Config::default(),
    };

    // Synthetic travel times: inter-zone spread plus a rush-hour surcharge.
    let table = TravelTimeTable::from_fn(|origin, destination, hour, _day| {
        let spread = origin.id().abs_diff(destination.id());
        let rush = if (7..10).contains(&hour) || (17..20).contains(&hour) {
            1
        } else {
            0
        };
        spread + rush
    });

    let mut env = CabEnv::new(config);
    let num_episodes = 20;
    let mut summaries = Vec::with_capacity(num_episodes);
    for episode in 0..num_episodes {
        let (_, _, mut state) = env.reset();
        let mut total_reward = 0;
        let mut steps: UInt = 0;
        while env.accumulated_hours() < env.config.max_shift_hours {
            let offers = env.generate_requests(&state);
            // One-step greedy: take whichever offer pays best right now.
            let action = offers
                .actions
                .iter()
                .copied()
                .max_by_key(|offer| env.reward(&state, *offer, &table))
                .expect("idle is always offered");
            debug!("step {steps}: {action:?} from {state:?}");
            total_reward += env.reward(&state, action, &table);
            state = env.next_state(&state, action, &table);
            steps += 1;
        }
        info!(
            "episode {episode}: {steps} steps, {} travel hours, reward {total_reward}",
            env.accumulated_hours()
        );
        summaries.push(ShiftSummary {
            episode,
            steps,
            hours: env.accumulated_hours(),
            total_reward,
        });
    }

    println!("{}", serde_json::to_string(&summaries).unwrap());
}
