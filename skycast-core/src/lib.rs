//! Core library for SkyCast, a fake-weather service.
//!
//! This crate defines:
//! - City validation and the report models
//! - The seeded string hash and xorshift stream
//! - Forecast providers (seeded and simulated)
//! - Configuration handling
//!
//! It is used by `skycast-http` and the `skycast` binary.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod stream;

pub use config::{Config, ServerConfig, SimulatedConfig};
pub use error::WeatherError;
pub use model::{
    City, CurrentConditions, ForecastDay, ForecastResult, SimulatedDay, SimulatedWeather,
    WeatherReport,
};
pub use provider::{ForecastProvider, ProviderId, seeded::generate_forecast};
pub use stream::{SeededStream, derive_seed};
