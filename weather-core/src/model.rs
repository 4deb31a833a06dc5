use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Primary weather classification reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Snow,
    Thunderstorm,
    Other,
}

impl ConditionCategory {
    pub const fn all() -> &'static [ConditionCategory] {
        &[
            ConditionCategory::Clear,
            ConditionCategory::Clouds,
            ConditionCategory::Rain,
            ConditionCategory::Drizzle,
            ConditionCategory::Snow,
            ConditionCategory::Thunderstorm,
            ConditionCategory::Other,
        ]
    }

    /// Classify the provider's `weather[0].main` value. Unknown values map to `Other`.
    pub fn from_api(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "clear" => ConditionCategory::Clear,
            "clouds" => ConditionCategory::Clouds,
            "rain" => ConditionCategory::Rain,
            "drizzle" => ConditionCategory::Drizzle,
            "snow" => ConditionCategory::Snow,
            "thunderstorm" => ConditionCategory::Thunderstorm,
            _ => ConditionCategory::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionCategory::Clear => "clear",
            ConditionCategory::Clouds => "clouds",
            ConditionCategory::Rain => "rain",
            ConditionCategory::Drizzle => "drizzle",
            ConditionCategory::Snow => "snow",
            ConditionCategory::Thunderstorm => "thunderstorm",
            ConditionCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a successful current-weather lookup. Metric units throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub location_name: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    /// Raw condition label, e.g. "Rain".
    pub condition: String,
    pub description: String,
    pub wind_speed_mps: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub visibility_m: f64,
    pub observed_at: Option<DateTime<Utc>>,
}

impl WeatherResult {
    pub fn category(&self) -> ConditionCategory {
        ConditionCategory::from_api(&self.condition)
    }
}
