//! Rendering for the interactive view.
//!
//! Every function here is a pure function of the [`App`] and the active
//! [`ThemeMode`]; the mode is passed down explicitly rather than stored globally.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use weather_core::{Palette, Rgb, ThemeMode, WeatherResult, display};

use super::app::App;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];
const SEARCH_ICON: &str = "⌕";
const LOCATION_ICON: &str = "⌖";
const PLACEHOLDER: &str = "Search for a city...";
const CONTENT_WIDTH: u16 = 52;
const ERROR_FG: Color = Color::Rgb(248, 113, 113);
const ERROR_BORDER: Color = Color::Rgb(153, 27, 27);

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn spinner(tick: u32) -> &'static str {
    SPINNERS[(tick as usize / 2) % SPINNERS.len()]
}

/// Horizontally centered slice of `area`, at most `width` wide.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect { x: area.x + (area.width - width) / 2, width, ..area }
}

pub fn render(frame: &mut Frame, app: &App) {
    let mode = app.theme;
    let palette = mode.palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(color(palette.bg_primary))),
        area,
    );

    let [toggle, header, _, search, _, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_theme_toggle(frame, toggle, mode, &palette);
    render_header(frame, header, &palette);
    render_search(frame, centered(search, CONTENT_WIDTH), app, &palette);
    render_body(frame, centered(body, CONTENT_WIDTH), app, mode);
    render_footer(frame, footer, &palette);
}

fn render_theme_toggle(frame: &mut Frame, area: Rect, mode: ThemeMode, palette: &Palette) {
    // shows the mode you would switch to
    let (icon, label) = if mode.is_dark() { ("☀", "light") } else { ("☾", "dark") };
    let line = Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(color(palette.accent))),
        Span::styled(format!("{label} mode "), Style::default().fg(color(palette.text_secondary))),
        Span::styled("^T ", Style::default().fg(color(palette.primary)).bold()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

fn render_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Line::from(vec![
        Span::styled("Weather", Style::default().fg(color(palette.text_primary)).bold()),
        Span::styled("Cast", Style::default().fg(color(palette.primary)).bold()),
    ])
    .centered();
    let subtitle = Line::from(Span::styled(
        "Get real-time weather updates for any city",
        Style::default().fg(color(palette.text_secondary)),
    ))
    .centered();

    frame.render_widget(Paragraph::new(vec![title, subtitle]), area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let query = app.controller.query();

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color(palette.primary)))
        .style(Style::default().bg(color(palette.bg_card)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input, button] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(5)]).areas(inner);

    let text = if query.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(color(palette.text_secondary)))
    } else {
        Span::styled(query, Style::default().fg(color(palette.text_primary)))
    };
    frame.render_widget(Paragraph::new(Line::from(vec![Span::raw(" "), text])), input);

    let button_style = if app.can_submit() {
        Style::default().fg(color(palette.bg_card)).bg(color(palette.primary)).bold()
    } else {
        Style::default()
            .fg(color(palette.text_secondary))
            .bg(color(palette.bg_primary))
            .add_modifier(Modifier::DIM)
    };
    let glyph = if app.controller.is_loading() { spinner(app.tick) } else { SEARCH_ICON };
    frame.render_widget(
        Paragraph::new(format!(" {glyph} ")).style(button_style).alignment(Alignment::Center),
        button,
    );

    if let Some(x) = cursor_column(input, query) {
        frame.set_cursor_position((x, input.y));
    }
}

/// Column just past the query's display width, if that still lies inside `input`.
fn cursor_column(input: Rect, query: &str) -> Option<u16> {
    // one cell of left padding precedes the text
    let offset = u16::try_from(Span::raw(query).width().checked_add(1)?).ok()?;
    input.x.checked_add(offset).filter(|x| *x < input.right())
}

fn render_body(frame: &mut Frame, area: Rect, app: &App, mode: ThemeMode) {
    let controller = &app.controller;
    let palette = mode.palette();

    let mut rest = area;
    if let Some(err) = controller.error() {
        let [banner, below] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(rest);
        render_error_banner(frame, banner, err.user_message());
        rest = below;
    }

    if controller.is_loading() {
        render_loading(frame, rest, app.tick, &palette);
    } else if let Some(result) = controller.displayed_result() {
        render_card(frame, rest, result, mode);
    }
}

fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(Span::styled(message, Style::default().fg(ERROR_FG))))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ERROR_BORDER)),
        );
    frame.render_widget(banner, area);
}

fn render_loading(frame: &mut Frame, area: Rect, tick: u32, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(spinner(tick), Style::default().fg(color(palette.primary)).bold()))
            .centered(),
        Line::from(Span::styled(
            "Fetching weather data...",
            Style::default().fg(color(palette.text_secondary)),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_card(frame: &mut Frame, area: Rect, result: &WeatherResult, mode: ThemeMode) {
    let palette = mode.palette();
    let category = result.category();
    let accent = color(display::condition_color(category, mode));
    let secondary = Style::default().fg(color(palette.text_secondary));

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color(palette.text_secondary)))
        .style(Style::default().bg(color(palette.bg_card)));
    let [card] = Layout::vertical([Constraint::Length(15)]).areas(area);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [summary, _, tiles] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(8),
    ])
    .areas(inner);

    let summary_lines = vec![
        Line::from(vec![
            Span::styled(format!("{LOCATION_ICON} "), secondary),
            Span::styled(
                display::location(result),
                Style::default().fg(color(palette.text_primary)).bold(),
            ),
        ])
        .centered(),
        Line::from(vec![
            Span::styled(format!("{} ", display::icon_for(category).glyph()), Style::default().fg(accent)),
            Span::styled(display::temperature(result.temperature_c), Style::default().fg(accent).bold()),
        ])
        .centered(),
        Line::from(Span::styled(display::capitalize(&result.description), secondary)).centered(),
        Line::from(Span::styled(display::feels_like(result.feels_like_c), secondary)).centered(),
    ];
    frame.render_widget(Paragraph::new(summary_lines), summary);

    render_tiles(frame, tiles, result, &palette);
}

fn render_tiles(frame: &mut Frame, area: Rect, result: &WeatherResult, palette: &Palette) {
    let rows: [Rect; 2] =
        Layout::vertical([Constraint::Length(4), Constraint::Length(4)]).areas(area);
    let cells: Vec<Rect> = rows
        .iter()
        .flat_map(|row| {
            let cols: [Rect; 2] =
                Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(*row);
            cols
        })
        .collect();

    for (tile, cell) in display::detail_tiles(result).iter().zip(cells) {
        let lines = vec![
            Line::from(Span::styled(tile.label, Style::default().fg(color(palette.text_secondary))))
                .centered(),
            Line::from(Span::styled(
                tile.value.clone(),
                Style::default().fg(color(palette.text_primary)).bold(),
            ))
            .centered(),
        ];
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color(palette.bg_primary)));
        frame.render_widget(Paragraph::new(lines).block(block), cell);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let key = Style::default().fg(color(palette.primary)).bold();
    let hint = Style::default().fg(color(palette.text_secondary));
    let help = Line::from(vec![
        Span::styled("Enter", key),
        Span::styled(" search  ", hint),
        Span::styled("^U", key),
        Span::styled(" clear  ", hint),
        Span::styled("^T", key),
        Span::styled(" theme  ", hint),
        Span::styled("Esc", key),
        Span::styled(" quit", hint),
    ])
    .centered();
    frame.render_widget(Paragraph::new(help), area);
}
