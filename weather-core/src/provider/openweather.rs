use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::{Config, error::ProviderError, model::WeatherResult};

use super::WeatherProvider;

/// Client for the OpenWeather "current weather" endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<String>,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { api_key, base_url: base_url.into(), http })
    }

    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Self::new(config.api_key.clone(), config.base_url.clone(), config.timeout())
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherResult, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        tracing::debug!(city, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        parse_current(status, &body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, ProviderError> {
        self.fetch_current(city).await
    }
}

/// Turn a raw HTTP status and body into a [`WeatherResult`].
pub fn parse_current(status: StatusCode, body: &str) -> Result<WeatherResult, ProviderError> {
    if !status.is_success() {
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body: truncate_body(body),
        });
    }

    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or(ProviderError::Incomplete("empty weather list"))?;

    Ok(WeatherResult {
        location_name: parsed.name,
        country: parsed.sys.country,
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        condition: weather.main,
        description: weather.description,
        wind_speed_mps: parsed.wind.speed,
        humidity_pct: parsed.main.humidity,
        pressure_hpa: parsed.main.pressure,
        visibility_m: parsed.visibility,
        observed_at: parsed.dt.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    visibility: f64,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConditionCategory;

    const LONDON: &str = r#"{
        "name": "London",
        "dt": 1700000000,
        "sys": { "country": "GB" },
        "main": { "temp": 15.3, "feels_like": 14.1, "humidity": 72, "pressure": 1012 },
        "weather": [ { "main": "Rain", "description": "light rain" } ],
        "wind": { "speed": 4.1 },
        "visibility": 8000
    }"#;

    #[test]
    fn parses_london_payload() {
        let result = parse_current(StatusCode::OK, LONDON).unwrap();

        assert_eq!(result.location_name, "London");
        assert_eq!(result.country, "GB");
        assert_eq!(result.temperature_c, 15.3);
        assert_eq!(result.feels_like_c, 14.1);
        assert_eq!(result.humidity_pct, 72.0);
        assert_eq!(result.pressure_hpa, 1012.0);
        assert_eq!(result.description, "light rain");
        assert_eq!(result.category(), ConditionCategory::Rain);
        assert_eq!(result.wind_speed_mps, 4.1);
        assert_eq!(result.visibility_m, 8000.0);
        assert_eq!(result.observed_at.map(|t| t.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn missing_dt_is_not_an_error() {
        let body = LONDON.replace(r#""dt": 1700000000,"#, "");
        let result = parse_current(StatusCode::OK, &body).unwrap();
        assert!(result.observed_at.is_none());
    }

    #[test]
    fn not_found_status_is_an_error() {
        let err = parse_current(
            StatusCode::NOT_FOUND,
            r#"{"cod":"404","message":"city not found"}"#,
        )
        .unwrap_err();

        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("city not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let body = LONDON.replace(r#""visibility": 8000"#, r#""clouds": {}"#);
        let err = parse_current(StatusCode::OK, &body).unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[test]
    fn empty_weather_list_is_incomplete() {
        let body = LONDON.replace(
            r#"[ { "main": "Rain", "description": "light rain" } ]"#,
            "[]",
        );
        let err = parse_current(StatusCode::OK, &body).unwrap_err();
        assert!(matches!(err, ProviderError::Incomplete(_)));
    }

    #[test]
    fn truncates_long_bodies_on_char_boundary() {
        let body = "é".repeat(300);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
