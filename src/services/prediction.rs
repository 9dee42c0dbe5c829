//! Prediction Service Client
//!
//! The single outbound call of the application: `POST {base_url}/predict`
//! with a JSON payload, answered by either a series or an error message.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::domain::config::ForecastConfig;
use crate::domain::forecast::{ForecastPayload, ForecastSeries, PredictionResponse};
use crate::error::ForecastResult;

/// Anything that can turn a payload into a forecast series
///
/// One call means one request: implementations must not retry or cache.
pub trait PredictionService: Send + Sync {
    fn predict(&self, payload: ForecastPayload)
    -> impl Future<Output = ForecastResult<ForecastSeries>> + Send;
}

/// reqwest-backed client for the external prediction service
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: Client,
    url: String,
}

impl HttpPredictionClient {
    /// Create a client for the configured service address
    pub fn new(config: &ForecastConfig) -> ForecastResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            url: config.predict_url(),
        })
    }
}

impl PredictionService for HttpPredictionClient {
    async fn predict(&self, payload: ForecastPayload) -> ForecastResult<ForecastSeries> {
        tracing::debug!(url = %self.url, days = payload.days, start_date = %payload.start_date, "POST predict");

        // The status code is not consulted: the body carries either the
        // series or the error message.
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "predict response received");

        PredictionResponse::from_body(&body)?.into_series()
    }
}
