use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::WeatherError;

/// A city name that has passed boundary validation.
///
/// The raw text is kept as entered: the seeded generator hashes it untrimmed,
/// while responses echo [`City::trimmed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    raw: String,
}

impl City {
    /// Accepts any input that is not absent, empty or whitespace-only.
    pub fn parse(input: Option<&str>) -> Result<Self, WeatherError> {
        match input {
            Some(raw) if !raw.trim().is_empty() => Ok(Self { raw: raw.to_owned() }),
            _ => Err(WeatherError::InvalidInput),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }
}

impl TryFrom<&str> for City {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        City::parse(Some(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: i32,
    pub wind: i32,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub label: String,
    pub condition: String,
    pub high: i32,
    pub low: i32,
    pub humidity: i32,
    pub wind: i32,
}

/// Output of the seeded generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub city: String,
    pub region: String,
    #[serde(serialize_with = "millis_rfc3339")]
    pub generated_at: DateTime<Utc>,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

// `2024-01-01T12:00:00.123Z`, the shape browsers produce with `toISOString()`.
fn millis_rfc3339<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedDay {
    pub day: String,
    pub temperature: i32,
    pub condition: String,
}

/// Output of the unseeded generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedWeather {
    pub city: String,
    pub temperature: i32,
    pub condition: String,
    pub humidity: i32,
    pub wind_speed: i32,
    pub forecast: Vec<SimulatedDay>,
}

/// Whatever the configured provider produced; serialized without a tag so
/// each variant keeps its own JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeatherReport {
    Seeded(ForecastResult),
    Simulated(SimulatedWeather),
}

impl WeatherReport {
    pub fn city(&self) -> &str {
        match self {
            WeatherReport::Seeded(r) => &r.city,
            WeatherReport::Simulated(r) => &r.city,
        }
    }
}
