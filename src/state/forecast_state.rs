//! ForecastState - Forecast Inputs, Series and Request Lifecycle

use crate::constants::DEFAULT_HORIZON_DAYS;
use crate::domain::forecast::ForecastSeries;
use crate::error::ForecastError;
use crate::services::request_builder::default_start_time;

/// Lifecycle of the forecast request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Last request produced the current series
    Success,
    /// Last request failed
    Failed(ForecastError),
}

impl RequestState {
    /// Check if currently loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the last request succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Check if there was an error
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Get the error of the last request, if any
    pub fn error(&self) -> Option<&ForecastError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Get error message if any
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

/// State for one forecast view session
#[derive(Debug, Clone)]
pub struct ForecastState {
    /// Horizon as typed by the user
    horizon: String,
    /// Start time as typed by the user
    start_time: String,
    /// Last successfully fetched series
    series: ForecastSeries,
    /// Current request state
    request: RequestState,
    /// Generation of the most recent request
    generation: u64,
}

impl ForecastState {
    /// Create a state with the given raw inputs and an empty series
    pub fn new(horizon: impl Into<String>, start_time: impl Into<String>) -> Self {
        Self {
            horizon: horizon.into(),
            start_time: start_time.into(),
            series: ForecastSeries::default(),
            request: RequestState::Idle,
            generation: 0,
        }
    }

    // ==================== Getters ====================

    pub fn horizon(&self) -> &str {
        &self.horizon
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn series(&self) -> &ForecastSeries {
        &self.series
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if currently loading
    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    // ==================== Mutators ====================

    pub(crate) fn set_horizon(&mut self, horizon: String) {
        self.horizon = horizon;
    }

    pub(crate) fn set_start_time(&mut self, start_time: String) {
        self.start_time = start_time;
    }

    /// Enter Loading and return the generation tag of the new request
    pub(crate) fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.request = RequestState::Loading;
        self.generation
    }

    /// Replace the series wholesale and mark success
    pub(crate) fn succeed(&mut self, series: ForecastSeries) {
        self.series = series;
        self.request = RequestState::Success;
    }

    /// Mark failure; the series is left untouched
    pub(crate) fn fail(&mut self, error: ForecastError) {
        self.request = RequestState::Failed(error);
    }
}

impl Default for ForecastState {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_DAYS.to_string(), default_start_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ForecastState::default();
        assert_eq!(state.horizon(), "7");
        assert!(!state.start_time().is_empty());
        assert!(state.series().is_empty());
        assert_eq!(state.request(), &RequestState::Idle);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_generation_increases_per_request() {
        let mut state = ForecastState::new("7", "2024-01-01T00:00");
        assert_eq!(state.begin_request(), 1);
        state.fail(ForecastError::Transport {
            message: "down".to_string(),
        });
        assert_eq!(state.begin_request(), 2);
        assert!(state.is_loading());
    }

    #[test]
    fn test_failure_keeps_series() {
        let mut state = ForecastState::new("7", "2024-01-01T00:00");
        let series = ForecastSeries::from_parallel(vec!["00:00".into()], vec![1.0]).expect("series");

        state.begin_request();
        state.succeed(series.clone());
        state.begin_request();
        state.fail(ForecastError::Service {
            message: "model unavailable".to_string(),
        });

        assert_eq!(state.series(), &series);
        assert_eq!(
            state.request().error_message().as_deref(),
            Some("model unavailable")
        );
    }
}
