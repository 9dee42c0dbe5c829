//! Forecast - Query, Payload, Response and Series Types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::START_TIME_FORMAT;
use crate::error::{ForecastError, ForecastResult};

/// User input for a forecast request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastQuery {
    /// Local start time (minute precision)
    pub start_time: NaiveDateTime,
    /// Number of days to forecast
    pub horizon_days: u32,
}

/// Request body expected by the prediction service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub days: u32,
    #[serde(rename = "startDate")]
    pub start_date: String,
}

impl ForecastPayload {
    /// Build the payload for an already validated query
    pub fn from_query(query: &ForecastQuery) -> Self {
        Self {
            days: query.horizon_days,
            start_date: query.start_time.format(START_TIME_FORMAT).to_string(),
        }
    }
}

/// A single point of the plotted series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Label as returned by the service
    pub timestamp: String,
    /// Predicted power (kW)
    pub power: f64,
}

/// Ordered, display-ready forecast series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastSeries(Vec<ForecastPoint>);

impl ForecastSeries {
    /// Zip the service's parallel arrays index-for-index
    ///
    /// Arrays of different length are rejected instead of truncated.
    pub fn from_parallel(timestamps: Vec<String>, predictions: Vec<f64>) -> ForecastResult<Self> {
        if timestamps.len() != predictions.len() {
            return Err(ForecastError::ResponseFormat {
                message: format!(
                    "timestamps has {} entries but predictions has {}",
                    timestamps.len(),
                    predictions.len()
                ),
            });
        }

        let points = timestamps
            .into_iter()
            .zip(predictions)
            .map(|(timestamp, power)| ForecastPoint { timestamp, power })
            .collect();

        Ok(Self(points))
    }

    /// Get all points in response order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.0
    }

    /// Get the number of points
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest predicted power, if any
    pub fn peak(&self) -> Option<&ForecastPoint> {
        self.0
            .iter()
            .max_by(|a, b| a.power.total_cmp(&b.power))
    }
}

/// Raw reply of the prediction service
///
/// Both the success and the failure shape are decoded into the same struct;
/// [`PredictionResponse::into_series`] decides which one it was.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub timestamps: Option<Vec<String>>,
    #[serde(default)]
    pub predictions: Option<Vec<f64>>,
}

impl PredictionResponse {
    /// Decode a response body
    ///
    /// A body that is not JSON at all is a transport problem; JSON of the
    /// wrong shape is a format problem.
    pub fn from_body(body: &str) -> ForecastResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(ForecastError::ResponseFormat {
                message: "response is not a JSON object".to_string(),
            });
        }

        serde_json::from_value(value).map_err(|e| ForecastError::ResponseFormat {
            message: e.to_string(),
        })
    }

    /// Turn the response into a series or the error it carries
    pub fn into_series(self) -> ForecastResult<ForecastSeries> {
        match self.error {
            Some(Value::Null) | None => {}
            Some(Value::String(message)) => return Err(ForecastError::Service { message }),
            Some(other) => {
                return Err(ForecastError::Service {
                    message: other.to_string(),
                });
            }
        }

        let Some(timestamps) = self.timestamps else {
            return Err(ForecastError::ResponseFormat {
                message: "missing field `timestamps`".to_string(),
            });
        };
        let Some(predictions) = self.predictions else {
            return Err(ForecastError::ResponseFormat {
                message: "missing field `predictions`".to_string(),
            });
        };

        ForecastSeries::from_parallel(timestamps, predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ForecastResult<ForecastSeries> {
        PredictionResponse::from_body(body)?.into_series()
    }

    #[test]
    fn test_zip_preserves_order_and_values() {
        let series = parse(r#"{"timestamps": ["00:00", "01:00"], "predictions": [3.2, 3.5]}"#)
            .expect("series");

        assert_eq!(
            series.points(),
            &[
                ForecastPoint { timestamp: "00:00".into(), power: 3.2 },
                ForecastPoint { timestamp: "01:00".into(), power: 3.5 },
            ]
        );
    }

    #[test]
    fn test_empty_arrays_give_empty_series() {
        let series = parse(r#"{"timestamps": [], "predictions": []}"#).expect("series");
        assert!(series.is_empty());
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let err = parse(r#"{"timestamps": ["00:00", "01:00"], "predictions": [3.2]}"#)
            .expect_err("mismatch");
        assert!(matches!(err, ForecastError::ResponseFormat { .. }));
    }

    #[test]
    fn test_error_field_wins() {
        let err = parse(r#"{"error": "model unavailable"}"#).expect_err("service error");
        assert_eq!(
            err,
            ForecastError::Service {
                message: "model unavailable".to_string()
            }
        );
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[test]
    fn test_non_string_error_is_rendered_as_json() {
        let err = parse(r#"{"error": {"code": 3}}"#).expect_err("service error");
        assert_eq!(
            err,
            ForecastError::Service {
                message: r#"{"code":3}"#.to_string()
            }
        );
    }

    #[test]
    fn test_null_error_falls_through_to_series() {
        let series = parse(r#"{"error": null, "timestamps": ["a"], "predictions": [1.0]}"#)
            .expect("series");
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_missing_fields() {
        let err = parse(r#"{"timestamps": ["00:00"]}"#).expect_err("missing predictions");
        assert!(matches!(err, ForecastError::ResponseFormat { .. }));

        let err = parse(r#"{}"#).expect_err("missing everything");
        assert!(matches!(err, ForecastError::ResponseFormat { .. }));
    }

    #[test]
    fn test_wrong_element_types() {
        let err = parse(r#"{"timestamps": ["00:00"], "predictions": ["high"]}"#)
            .expect_err("string prediction");
        assert!(matches!(err, ForecastError::ResponseFormat { .. }));
    }

    #[test]
    fn test_non_object_json() {
        let err = parse("[1, 2, 3]").expect_err("array body");
        assert!(matches!(err, ForecastError::ResponseFormat { .. }));
    }

    #[test]
    fn test_non_json_body_is_transport() {
        let err = parse("<html>Bad Gateway</html>").expect_err("html body");
        assert!(matches!(err, ForecastError::Transport { .. }));
    }

    #[test]
    fn test_payload_field_names() {
        let payload = ForecastPayload {
            days: 7,
            start_date: "2024-01-01T00:00".to_string(),
        };
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json, serde_json::json!({"days": 7, "startDate": "2024-01-01T00:00"}));
    }

    #[test]
    fn test_series_serializes_as_point_array() {
        let series = ForecastSeries::from_parallel(vec!["00:00".into()], vec![1.5]).expect("series");
        let json = serde_json::to_value(&series).expect("serialize");
        assert_eq!(json, serde_json::json!([{"timestamp": "00:00", "power": 1.5}]));
    }

    #[test]
    fn test_peak() {
        let series = ForecastSeries::from_parallel(
            vec!["a".into(), "b".into(), "c".into()],
            vec![1.0, 4.5, 2.0],
        )
        .expect("series");
        assert_eq!(series.peak().map(|p| p.timestamp.as_str()), Some("b"));
        assert!(ForecastSeries::default().peak().is_none());
    }
}
