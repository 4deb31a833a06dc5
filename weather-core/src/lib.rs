//! Core library for the `weather` terminal app.
//!
//! This crate defines:
//! - Configuration (optional config file plus the API key from the environment)
//! - The weather provider abstraction and the OpenWeather client
//! - The query lifecycle (`QueryController`) and its error taxonomy
//! - Theme palettes and the pure display mappings
//!
//! It is used by `weather-cli`, but has no terminal dependencies of its own.

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod model;
pub mod provider;
pub mod theme;

pub use config::Config;
pub use controller::{LookupTicket, QueryController, RequestState};
pub use error::{LookupError, ProviderError};
pub use model::{ConditionCategory, WeatherResult};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use theme::{Palette, Rgb, ThemeMode};
