//! Constants
//!
//! Centralized defaults and limits shared across the application.

/// Default prediction service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable read into `--api-url` when the flag is absent
pub const BASE_URL_ENV: &str = "FORECAST_API_URL";

/// Prediction endpoint path
pub const PREDICT_PATH: &str = "/predict";

/// Horizon bounds (days, inclusive)
pub const MIN_HORIZON_DAYS: u32 = 1;
pub const MAX_HORIZON_DAYS: u32 = 30;
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Start time wire format (minute precision, no seconds)
pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// HTTP request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "power-forecast.log";

/// Chart labels
pub const CHART_TITLE: &str = "Power Consumption Forecast";
pub const CHART_SERIES_NAME: &str = "Power Consumption";
pub const CHART_Y_AXIS_LABEL: &str = "Power (kW)";

/// Button labels
pub const PREDICT_LABEL: &str = "Predict";
pub const LOADING_LABEL: &str = "Loading...";
