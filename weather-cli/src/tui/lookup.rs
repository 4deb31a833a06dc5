//! Background weather lookups for the interactive view.

use std::sync::Arc;

use tokio::{sync::mpsc, task::AbortHandle};
use weather_core::{LookupTicket, ProviderError, WeatherProvider, WeatherResult};

/// A finished lookup, tagged with the ticket that started it.
#[derive(Debug)]
pub struct LookupDone {
    pub ticket_id: u64,
    pub outcome: Result<WeatherResult, ProviderError>,
}

/// Runs at most one lookup at a time; starting a new one aborts the previous.
pub struct LookupTasks {
    provider: Arc<dyn WeatherProvider>,
    tx: mpsc::UnboundedSender<LookupDone>,
    current: Option<AbortHandle>,
}

impl LookupTasks {
    pub fn new(provider: Arc<dyn WeatherProvider>, tx: mpsc::UnboundedSender<LookupDone>) -> Self {
        Self { provider, tx, current: None }
    }

    pub fn spawn(&mut self, ticket: LookupTicket) {
        self.abort();

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = provider.current_weather(&ticket.city).await;
            // receiver gone means the view is shutting down
            let _ = tx.send(LookupDone { ticket_id: ticket.id, outcome });
        });

        self.current = Some(handle.abort_handle());
    }

    pub fn abort(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
    }
}

impl Drop for LookupTasks {
    fn drop(&mut self) {
        self.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    /// Answers "Paris" only after a long delay.
    #[derive(Debug)]
    struct SlowParis;

    #[async_trait]
    impl WeatherProvider for SlowParis {
        async fn current_weather(&self, city: &str) -> Result<WeatherResult, ProviderError> {
            if city == "Paris" {
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
            Ok(WeatherResult {
                location_name: city.into(),
                country: "DE".into(),
                temperature_c: 9.0,
                feels_like_c: 7.0,
                condition: "Clear".into(),
                description: "clear sky".into(),
                wind_speed_mps: 2.0,
                humidity_pct: 60.0,
                pressure_hpa: 1015.0,
                visibility_m: 10000.0,
                observed_at: None,
            })
        }
    }

    #[tokio::test]
    async fn new_lookup_aborts_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = LookupTasks::new(Arc::new(SlowParis), tx);

        tasks.spawn(LookupTicket { id: 1, city: "Paris".into() });
        tasks.spawn(LookupTicket { id: 2, city: "Berlin".into() });

        let done = rx.recv().await.expect("berlin lookup completes");
        assert_eq!(done.ticket_id, 2);
        assert_eq!(done.outcome.unwrap().location_name, "Berlin");

        drop(tasks);
        assert!(rx.recv().await.is_none(), "aborted paris lookup must never report");
    }
}
