//! Unseeded fake weather with its own ranges and condition list.
//!
//! Each call builds a fresh [`StdRng`]; nothing is shared between requests.
//! With a fixed seed configured every call replays the same sequence.

use chrono::{DateTime, Local};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{FORECAST_DAYS, ForecastProvider, ProviderId, weekday_label};
use crate::{City, SimulatedDay, SimulatedWeather, WeatherReport};

pub const CONDITIONS: [&str; 8] = [
    "Sunny",
    "Partly Cloudy",
    "Cloudy",
    "Rain",
    "Thunderstorms",
    "Snow",
    "Fog",
    "Windy",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedProvider {
    seed: Option<u64>,
}

impl SimulatedProvider {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl ForecastProvider for SimulatedProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Simulated
    }

    fn report(&self, city: &City, now: DateTime<Local>) -> WeatherReport {
        let mut rng = self.rng();
        WeatherReport::Simulated(simulate_weather(&mut rng, city.trimmed(), now))
    }
}

fn pick<R: Rng>(rng: &mut R) -> String {
    CONDITIONS[rng.random_range(0..CONDITIONS.len())].to_string()
}

/// Draws base temperature, condition, humidity and wind speed, then a
/// temperature delta and condition per day.
pub fn simulate_weather<R: Rng>(rng: &mut R, city: &str, now: DateTime<Local>) -> SimulatedWeather {
    let temperature: i32 = rng.random_range(25..=95);
    let condition = pick(rng);
    let humidity: i32 = rng.random_range(25..=90);
    let wind_speed: i32 = rng.random_range(0..=25);

    let forecast = (1..=FORECAST_DAYS as i64)
        .map(|days_ahead| {
            let delta: i32 = rng.random_range(-10..=10);
            SimulatedDay {
                day: weekday_label(now, days_ahead),
                temperature: (temperature + delta).max(0),
                condition: pick(rng),
            }
        })
        .collect();

    SimulatedWeather {
        city: city.to_string(),
        temperature,
        condition,
        humidity,
        wind_speed,
        forecast,
    }
}
