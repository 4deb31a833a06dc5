use anyhow::{Context, anyhow};
use chrono::Local;
use inquire::Text;
use weather_core::{
    Config, QueryController, RequestState, WeatherResult, display, provider_from_config,
};

/// One-shot lookup printed to stdout.
pub async fn run(config: &Config, city: Option<String>) -> anyhow::Result<()> {
    let city = match city {
        Some(city) => city,
        None => Text::new("City:")
            .with_placeholder("Search for a city...")
            .prompt()
            .context("Failed to read city name")?,
    };

    let provider = provider_from_config(config)?;
    let mut controller = QueryController::new();
    controller.set_query(city);

    match controller.submit(provider.as_ref()).await {
        RequestState::Success(result) => {
            print!("{}", render_card(result));
            Ok(())
        }
        RequestState::Failed(err) => Err(err.clone().into()),
        other => Err(anyhow!("lookup settled in non-terminal state {other:?}")),
    }
}

/// Plain-text rendition of the result card.
pub fn render_card(result: &WeatherResult) -> String {
    let category = result.category();
    let icon = display::icon_for(category);

    let mut out = String::new();
    out.push_str(&display::location(result));
    out.push('\n');
    out.push_str(&format!(
        "{} {}  {}\n",
        icon.glyph(),
        display::temperature(result.temperature_c),
        display::capitalize(&result.description)
    ));
    out.push_str(&display::feels_like(result.feels_like_c));
    out.push('\n');

    for tile in display::detail_tiles(result) {
        out.push_str(&format!("{:<12}{}\n", tile.label, tile.value));
    }

    if let Some(observed) = result.observed_at {
        let local = observed.with_timezone(&Local);
        out.push_str(&format!("Updated {}\n", local.format("%H:%M")));
    }

    out
}
