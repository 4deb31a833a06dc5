//! Presentation helpers shared by the interactive UI and the `show` command.
//!
//! Everything here is a pure function of a [`WeatherResult`], a
//! [`ConditionCategory`] or a [`ThemeMode`].

use crate::{
    model::{ConditionCategory, WeatherResult},
    theme::{Rgb, ThemeMode},
};

const CLEAR_COLOR: Rgb = Rgb::from_hex(0xFFD54F);
const THUNDERSTORM_COLOR: Rgb = Rgb::from_hex(0xEF5350);
const SNOW_COLOR: Rgb = Rgb::from_hex(0xE3F2FD);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionIcon {
    Sun,
    Cloud,
    CloudRain,
    CloudSnow,
    CloudLightning,
}

impl ConditionIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ConditionIcon::Sun => "☀",
            ConditionIcon::Cloud => "☁",
            ConditionIcon::CloudRain => "☂",
            ConditionIcon::CloudSnow => "❄",
            ConditionIcon::CloudLightning => "⚡",
        }
    }
}

pub fn icon_for(category: ConditionCategory) -> ConditionIcon {
    match category {
        ConditionCategory::Clear => ConditionIcon::Sun,
        ConditionCategory::Clouds => ConditionIcon::Cloud,
        ConditionCategory::Rain | ConditionCategory::Drizzle => ConditionIcon::CloudRain,
        ConditionCategory::Snow => ConditionIcon::CloudSnow,
        ConditionCategory::Thunderstorm => ConditionIcon::CloudLightning,
        ConditionCategory::Other => ConditionIcon::Sun,
    }
}

pub fn condition_color(category: ConditionCategory, mode: ThemeMode) -> Rgb {
    match category {
        ConditionCategory::Clear => CLEAR_COLOR,
        ConditionCategory::Thunderstorm => THUNDERSTORM_COLOR,
        ConditionCategory::Snow => SNOW_COLOR,
        ConditionCategory::Rain
        | ConditionCategory::Drizzle
        | ConditionCategory::Clouds
        | ConditionCategory::Other => mode.palette().primary,
    }
}

/// Round half up, so -0.5 becomes 0 rather than -1.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn temperature(celsius: f64) -> String {
    format!("{}°", round_half_up(celsius))
}

pub fn feels_like(celsius: f64) -> String {
    format!("Feels like {}°C", round_half_up(celsius))
}

pub fn wind(speed_mps: f64) -> String {
    format!("{speed_mps} m/s")
}

pub fn humidity(pct: f64) -> String {
    format!("{pct}%")
}

pub fn pressure(hpa: f64) -> String {
    format!("{hpa} hPa")
}

pub fn visibility(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

pub fn location(result: &WeatherResult) -> String {
    format!("{}, {}", result.location_name, result.country)
}

/// Uppercases the first letter of each word: "light rain" becomes "Light Rain".
pub fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_start = ch.is_whitespace();
    }
    out
}

/// One labeled detail in the result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTile {
    pub label: &'static str,
    pub value: String,
}

pub fn detail_tiles(result: &WeatherResult) -> [DetailTile; 4] {
    [
        DetailTile { label: "Wind", value: wind(result.wind_speed_mps) },
        DetailTile { label: "Humidity", value: humidity(result.humidity_pct) },
        DetailTile { label: "Pressure", value: pressure(result.pressure_hpa) },
        DetailTile { label: "Visibility", value: visibility(result.visibility_m) },
    ]
}
