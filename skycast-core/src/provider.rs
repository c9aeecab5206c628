use crate::{City, Config, WeatherReport};
use chrono::{DateTime, Local, TimeDelta};
use std::{convert::TryFrom, fmt::Debug};

pub mod seeded;
pub mod simulated;

pub use seeded::SeededProvider;
pub use simulated::SimulatedProvider;

/// Number of days every generator forecasts, starting tomorrow.
pub const FORECAST_DAYS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderId {
    #[default]
    Seeded,
    Simulated,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Seeded => "seeded",
            ProviderId::Simulated => "simulated",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Seeded, ProviderId::Simulated]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "seeded" => Ok(ProviderId::Seeded),
            "simulated" => Ok(ProviderId::Simulated),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: seeded, simulated."
            )),
        }
    }
}

/// A fake-weather generator. Implementations hold no per-request state, so a
/// single instance can be shared across threads.
pub trait ForecastProvider: Send + Sync + Debug {
    fn id(&self) -> ProviderId;

    /// `now` only feeds timestamps and weekday labels.
    fn report(&self, city: &City, now: DateTime<Local>) -> WeatherReport;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(id: ProviderId, config: &Config) -> Box<dyn ForecastProvider> {
    match id {
        ProviderId::Seeded => Box::new(SeededProvider),
        ProviderId::Simulated => Box::new(SimulatedProvider::new(config.simulated.seed)),
    }
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let id = config.default_provider_id()?;
    Ok(provider_from_config(id, config))
}

/// Short weekday name ("Mon", "Tue", ...) for `now + days_ahead` days.
pub fn weekday_label(now: DateTime<Local>, days_ahead: i64) -> String {
    (now + TimeDelta::days(days_ahead)).format("%a").to_string()
}
