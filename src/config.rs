use serde::{Deserialize, Serialize};

use crate::spaces::TRIP_ACTION_COUNT;
use crate::{Int, NUM_LOCATIONS, UInt};

/// Environment parameters, loadable from `cabenv.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Hourly fuel and misc costs.
    pub idle_cost_per_hour: Int,
    /// Hourly revenue while carrying a passenger.
    pub revenue_per_ride_hour: Int,
    /// Mean ride requests per step, one rate per zone.
    pub request_rates: [f64; NUM_LOCATIONS],
    /// Cap on ride offers surfaced in a single step.
    pub max_requests: usize,
    /// Accumulated travel hours after which a shift ends.
    pub max_shift_hours: UInt,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            idle_cost_per_hour: 5,
            revenue_per_ride_hour: 9,
            request_rates: [2.0, 12.0, 4.0, 7.0, 8.0],
            max_requests: 15,
            max_shift_hours: 720,
        }
    }
}

impl Config {
    /// Panics if the parameters violate the sampling invariants.
    pub fn validate(&self) {
        for (index, rate) in self.request_rates.iter().enumerate() {
            assert!(
                rate.is_finite() && *rate > 0.0,
                "request rate for zone {index} must be positive and finite, got {rate}"
            );
        }
        assert!(
            self.max_requests <= TRIP_ACTION_COUNT,
            "max_requests {} exceeds the {TRIP_ACTION_COUNT} distinct trips; \
             offers are sampled without replacement",
            self.max_requests
        );
    }
}
