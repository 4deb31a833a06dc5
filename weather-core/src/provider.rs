use crate::{Config, WeatherResult, error::ProviderError, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up current conditions for an already trimmed, non-empty city name.
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, ProviderError>;
}

/// Construct the OpenWeather provider from config.
///
/// A missing API key is not an error here; lookups fail with
/// [`ProviderError::MissingApiKey`] instead so the UI can still start.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    if !config.has_api_key() {
        tracing::warn!(
            "no API key configured; lookups will fail until OPENWEATHER_API_KEY is set"
        );
    }

    let provider = OpenWeatherProvider::from_config(config)?;
    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_works_without_api_key() {
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_ok());
    }

    #[tokio::test]
    async fn missing_api_key_fails_lookup_without_request() {
        let cfg = Config {
            // unroutable: a real request would error differently
            base_url: "http://127.0.0.1:9/weather".into(),
            ..Config::default()
        };
        let provider = provider_from_config(&cfg).unwrap();

        let err = provider.current_weather("London").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
    }
}
