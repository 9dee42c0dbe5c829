//! Config - Prediction Service Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, PREDICT_PATH};

/// Configuration handed to the forecast client at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Address of the prediction service (e.g., "http://localhost:5000")
    pub base_url: String,
}

impl ForecastConfig {
    /// Create a config pointing at the given service address
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the prediction endpoint
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PREDICT_PATH)
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
