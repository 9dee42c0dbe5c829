//! Forecast Controller
//!
//! Owns the forecast view state, builds the request, talks to the prediction
//! service and folds the outcome back into the state.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ──submit──► Loading ──► Success ──submit──► Loading ──► ...
//!                     │
//!                     └──────► Failed ──submit──► Loading ──► ...
//! ```
//!
//! Every request carries a generation tag. A completion whose tag is not the
//! current generation is discarded, so a late response can never overwrite a
//! fresher result.

use crossbeam_channel::Sender;

use crate::domain::config::ForecastConfig;
use crate::domain::forecast::{ForecastPayload, ForecastSeries};
use crate::error::{ForecastError, ForecastResult};
use crate::eventing::app_event::AppEvent;
use crate::features::forecast::view::ForecastView;
use crate::services::prediction::{HttpPredictionClient, PredictionService};
use crate::services::request_builder;
use crate::services::runtime::spawn_in_tokio;
use crate::state::forecast_state::ForecastState;

/// Message recorded when a request ends without ever reporting back
pub const REQUEST_DROPPED: &str = "request dropped before completion";

/// A request that passed validation and is about to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingForecast {
    pub generation: u64,
    pub payload: ForecastPayload,
}

/// What a submit (or a completion) did to the state
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A request was already in flight; nothing happened
    Ignored,
    /// Request handed to the background runtime
    Dispatched { generation: u64 },
    /// New series stored
    Succeeded { points: usize },
    /// Request failed; series left as it was
    Failed(ForecastError),
    /// Completion belonged to an older request and was dropped
    Stale { generation: u64 },
}

/// Forecast page controller
pub struct ForecastController<S> {
    service: S,
    state: ForecastState,
}

impl ForecastController<HttpPredictionClient> {
    /// Create a controller talking to the configured prediction service
    pub fn new(config: &ForecastConfig) -> ForecastResult<Self> {
        Ok(Self::with_service(HttpPredictionClient::new(config)?))
    }
}

impl<S: PredictionService> ForecastController<S> {
    /// Create a controller with default inputs around the given service
    pub fn with_service(service: S) -> Self {
        Self::with_state(service, ForecastState::default())
    }

    /// Create a controller with explicit initial inputs
    pub fn with_state(service: S, state: ForecastState) -> Self {
        Self { service, state }
    }

    /// Get the current state
    pub fn state(&self) -> &ForecastState {
        &self.state
    }

    /// Get the derived view state for the rendering layer
    pub fn view(&self) -> ForecastView<'_> {
        ForecastView::from_state(&self.state)
    }

    /// Get the underlying service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Set horizon input; rejected while a request is in flight
    pub fn set_horizon(&mut self, days: impl Into<String>) -> ForecastResult<()> {
        self.ensure_idle()?;
        self.state.set_horizon(days.into());
        Ok(())
    }

    /// Set start time input; rejected while a request is in flight
    pub fn set_start_time(&mut self, time: impl Into<String>) -> ForecastResult<()> {
        self.ensure_idle()?;
        self.state.set_start_time(time.into());
        Ok(())
    }

    fn ensure_idle(&self) -> ForecastResult<()> {
        if self.state.is_loading() {
            return Err(ForecastError::Busy);
        }
        Ok(())
    }

    /// Enter Loading and validate the inputs
    ///
    /// Returns `None` when a request is already in flight (state untouched)
    /// or when validation failed (state is now Failed).
    pub fn begin_submit(&mut self) -> Option<PendingForecast> {
        if self.state.is_loading() {
            tracing::debug!("Forecast request already in flight, ignoring submit");
            return None;
        }

        let generation = self.state.begin_request();
        let payload = request_builder::parse_query(self.state.horizon(), self.state.start_time())
            .and_then(|query| request_builder::build(&query));

        match payload {
            Ok(payload) => {
                tracing::info!(
                    generation,
                    days = payload.days,
                    start_date = %payload.start_date,
                    "Requesting forecast"
                );
                Some(PendingForecast {
                    generation,
                    payload,
                })
            }
            Err(err) => {
                tracing::warn!(generation, "Forecast query rejected: {}", err);
                self.state.fail(err);
                None
            }
        }
    }

    /// Fold a request result back into the state
    pub fn complete(&mut self, generation: u64, result: ForecastResult<ForecastSeries>) -> SubmitOutcome {
        if generation != self.state.generation() || !self.state.is_loading() {
            tracing::debug!(
                generation,
                current = self.state.generation(),
                "Discarding stale forecast response"
            );
            return SubmitOutcome::Stale { generation };
        }

        match result {
            Ok(series) => {
                let points = series.len();
                tracing::info!(generation, points, "Forecast received");
                self.state.succeed(series);
                SubmitOutcome::Succeeded { points }
            }
            Err(err) => {
                tracing::warn!(generation, kind = err.kind(), "Forecast request failed: {}", err);
                self.state.fail(err.clone());
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Build, send and apply one forecast request
    ///
    /// Always leaves the state in Success or Failed unless the call was
    /// ignored because another request is in flight. Dropping the future
    /// before it resolves fails the request with a transport error.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_loading() {
            return SubmitOutcome::Ignored;
        }

        let Some(pending) = self.begin_submit() else {
            return self.failed_outcome();
        };

        let guard = LoadingGuard::new(&mut self.state, pending.generation);
        let result = self.service.predict(pending.payload).await;
        guard.disarm();

        self.complete(pending.generation, result)
    }

    /// Fail the in-flight request whose completion will never arrive
    ///
    /// Used when the task carrying the request is gone. Ignored when nothing
    /// is loading.
    pub fn abandon(&mut self, message: impl Into<String>) -> SubmitOutcome {
        if !self.state.is_loading() {
            return SubmitOutcome::Ignored;
        }

        let generation = self.state.generation();
        self.complete(
            generation,
            Err(ForecastError::Transport {
                message: message.into(),
            }),
        )
    }

    fn failed_outcome(&self) -> SubmitOutcome {
        match self.state.request().error() {
            Some(err) => SubmitOutcome::Failed(err.clone()),
            None => SubmitOutcome::Ignored,
        }
    }

    /// Apply an event coming back from the background runtime
    pub fn handle_event(&mut self, event: AppEvent) -> SubmitOutcome {
        match event {
            AppEvent::ForecastCompleted { generation, result } => self.complete(generation, result),
        }
    }
}

impl<S: PredictionService + Clone + 'static> ForecastController<S> {
    /// Start a request on the background runtime without waiting for it
    ///
    /// The result arrives on `events` as [`AppEvent::ForecastCompleted`] and
    /// must be passed to [`ForecastController::handle_event`].
    pub fn dispatch(&mut self, events: &Sender<AppEvent>) -> SubmitOutcome {
        if self.state.is_loading() {
            return SubmitOutcome::Ignored;
        }

        let Some(PendingForecast {
            generation,
            payload,
        }) = self.begin_submit()
        else {
            return self.failed_outcome();
        };

        let service = self.service.clone();
        let tx = events.clone();
        spawn_in_tokio(async move {
            let result = service.predict(payload).await;
            let _ = tx.send(AppEvent::ForecastCompleted { generation, result });
        });

        SubmitOutcome::Dispatched { generation }
    }
}

/// Fails the request it guards if dropped while still armed
struct LoadingGuard<'a> {
    state: &'a mut ForecastState,
    generation: u64,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(state: &'a mut ForecastState, generation: u64) -> Self {
        Self {
            state,
            generation,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed || !self.state.is_loading() || self.state.generation() != self.generation {
            return;
        }

        tracing::warn!(generation = self.generation, "Forecast request dropped before completion");
        self.state.fail(ForecastError::Transport {
            message: REQUEST_DROPPED.to_string(),
        });
    }
}

impl<S> std::fmt::Debug for ForecastController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastController")
            .field("state", &self.state)
            .finish()
    }
}
