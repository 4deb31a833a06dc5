//! Terminal event polling.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

const POLL_TIMEOUT: Duration = Duration::from_millis(10);
const LOOP_SLEEP: Duration = Duration::from_millis(16);
const MAX_EVENTS_PER_BATCH: usize = 20;

#[derive(Debug, Clone)]
pub enum TermEvent {
    Key(KeyEvent),
    Resize,
}

/// Spawn a task that forwards crossterm events until `cancel` fires.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<TermEvent>,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("event poller cancelled");
                    // drain so keys typed during shutdown don't leak to the shell
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(LOOP_SLEEP) => {
                    let mut processed = 0;
                    while processed < MAX_EVENTS_PER_BATCH
                        && event::poll(POLL_TIMEOUT).unwrap_or(false)
                    {
                        processed += 1;
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => Some(TermEvent::Key(key)),
                            Ok(Event::Resize(..)) => Some(TermEvent::Resize),
                            Ok(_) => None,
                            Err(err) => {
                                tracing::warn!(error = %err, "failed to read terminal event");
                                None
                            }
                        };
                        if let Some(ev) = forwarded {
                            if tx.send(ev).is_err() {
                                tracing::debug!("event channel closed, stopping poller");
                                return;
                            }
                        }
                    }
                }
            }
        }
    })
}
