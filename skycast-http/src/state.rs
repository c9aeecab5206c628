use std::sync::Arc;

use skycast_core::{Config, ForecastProvider, provider::default_provider_from_config};

// Cloned into every request; the provider itself is shared.
#[derive(Clone, Debug)]
pub struct AppState {
    pub provider: Arc<dyn ForecastProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ForecastProvider>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::from(default_provider_from_config(config)?)))
    }
}
