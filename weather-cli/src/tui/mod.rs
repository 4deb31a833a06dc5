//! Interactive terminal view.
//!
//! One loop owns the [`App`]. Three sources feed it: terminal events from the
//! poller task, finished lookups from [`LookupTasks`], and a spinner tick.

mod app;
mod event;
mod lookup;
mod ui;

use std::{io, sync::Arc, time::Duration};

use anyhow::Context;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use weather_core::{Config, WeatherProvider, provider_from_config};

use app::{App, Effect};
use event::TermEvent;
use lookup::LookupTasks;

const TICK: Duration = Duration::from_millis(120);

pub async fn run(config: &Config, initial_city: Option<String>) -> anyhow::Result<()> {
    let provider: Arc<dyn WeatherProvider> = Arc::from(provider_from_config(config)?);

    let mut app = App::new(config.theme);
    if let Some(city) = initial_city {
        app.controller.set_query(city);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _restore = OnDrop::new(|| {
        if let Err(err) = restore_terminal() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    });

    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    run_app(&mut terminal, app, provider).await
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Runs a closure once when dropped. Covers early returns and unwinding alike.
struct OnDrop<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> OnDrop<F> {
    fn new(action: F) -> Self {
        Self { action: Some(action) }
    }
}

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    provider: Arc<dyn WeatherProvider>,
) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let poller = event::spawn_event_poller(event_tx, cancel.clone());

    let (done_tx, mut done_rx) = mpsc::unbounded_channel();
    let mut lookups = LookupTasks::new(provider, done_tx);
    let mut ticker = tokio::time::interval(TICK);

    if !app.controller.query().is_empty()
        && let Some(Effect::FetchWeather(ticket)) = app.submit()
    {
        lookups.spawn(ticket);
    }

    let mut dirty = true;
    let result = loop {
        if dirty {
            if let Err(err) = terminal.draw(|frame| ui::render(frame, &app)) {
                break Err(err.into());
            }
        }

        dirty = tokio::select! {
            Some(ev) = event_rx.recv() => match ev {
                TermEvent::Key(key) => {
                    if let Some(Effect::FetchWeather(ticket)) = app.handle_key(key) {
                        lookups.spawn(ticket);
                    }
                    true
                }
                TermEvent::Resize => true,
            },
            Some(done) = done_rx.recv() => app.on_lookup_done(done.ticket_id, done.outcome),
            _ = ticker.tick() => app.on_tick(),
        };

        if app.should_quit() {
            break Ok(());
        }
    };

    cancel.cancel();
    lookups.abort();
    if let Err(err) = poller.await {
        tracing::warn!(error = %err, "event poller ended abnormally");
    }

    result
}
