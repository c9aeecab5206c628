use thiserror::Error;

/// Errors a caller can hit before any generator runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// Absent, empty or whitespace-only city name.
    #[error("Please provide a city to search.")]
    InvalidInput,
}
