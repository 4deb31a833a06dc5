//! Query lifecycle: search text in, [`RequestState`] out.
//!
//! Submissions follow a last-write-wins policy. Every accepted submit gets a
//! fresh [`LookupTicket`]; completions carrying an older ticket are dropped, so a
//! slow response for "Paris" can never overwrite a newer one for "Berlin".
//!
//! Callers that drive requests themselves (the interactive UI spawns them as
//! tasks) use [`QueryController::begin_submit`] and
//! [`QueryController::complete`]. Everything else can await
//! [`QueryController::submit`].

use std::sync::Arc;

use crate::{
    error::{LookupError, ProviderError},
    model::WeatherResult,
    provider::WeatherProvider,
};

/// What the presentation layer renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(Arc<WeatherResult>),
    Failed(LookupError),
}

/// Handle for one in-flight lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub id: u64,
    /// Trimmed, non-empty city name to send.
    pub city: String,
}

#[derive(Debug, Default)]
pub struct QueryController {
    query: String,
    state: RequestState,
    last_result: Option<Arc<WeatherResult>>,
    generation: u64,
}

impl QueryController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text verbatim.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn error(&self) -> Option<&LookupError> {
        match &self.state {
            RequestState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Most recent successful result, kept while a new lookup is loading.
    pub fn last_result(&self) -> Option<&Arc<WeatherResult>> {
        self.last_result.as_ref()
    }

    /// The result to show, only once a lookup has settled successfully.
    pub fn displayed_result(&self) -> Option<&WeatherResult> {
        match &self.state {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Validate the query and start a lookup.
    ///
    /// Returns `None` for an empty query, leaving the state `Failed(EmptyQuery)`
    /// and the previous result untouched. Otherwise the state is `Loading` and the
    /// returned ticket supersedes any lookup still in flight.
    pub fn begin_submit(&mut self) -> Option<LookupTicket> {
        let city = self.query.trim();
        if city.is_empty() {
            tracing::debug!("rejected empty query");
            self.state = RequestState::Failed(LookupError::EmptyQuery);
            return None;
        }

        let city = city.to_string();
        self.generation += 1;
        if self.is_loading() {
            tracing::debug!(superseded = self.generation - 1, "superseding in-flight lookup");
        }
        self.state = RequestState::Loading;

        tracing::info!(lookup = self.generation, city = %city, "weather lookup started");
        Some(LookupTicket { id: self.generation, city })
    }

    /// Settle the lookup identified by `ticket_id`.
    ///
    /// Returns `false` and changes nothing when the ticket has been superseded.
    pub fn complete(
        &mut self,
        ticket_id: u64,
        outcome: Result<WeatherResult, ProviderError>,
    ) -> bool {
        if ticket_id != self.generation || !self.is_loading() {
            tracing::debug!(lookup = ticket_id, current = self.generation, "dropping stale lookup result");
            return false;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(
                    lookup = ticket_id,
                    location = %result.location_name,
                    "weather lookup succeeded"
                );
                let result = Arc::new(result);
                self.last_result = Some(Arc::clone(&result));
                self.state = RequestState::Success(result);
            }
            Err(cause) => {
                tracing::info!(lookup = ticket_id, cause = %cause, "weather lookup failed");
                self.last_result = None;
                self.state = RequestState::Failed(cause.into());
            }
        }

        true
    }

    /// Run one full lookup against `provider`.
    pub async fn submit(&mut self, provider: &dyn WeatherProvider) -> &RequestState {
        if let Some(ticket) = self.begin_submit() {
            let outcome = provider.current_weather(&ticket.city).await;
            self.complete(ticket.id, outcome);
        }
        &self.state
    }
}
