use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Horizon used when the request does not name one.
pub const DEFAULT_PREDICTION_LENGTH: usize = 24;

/// Largest horizon the service will sample.
pub const MAX_PREDICTION_LENGTH: usize = 512;

/// Sampled future trajectories, one inner vector per sample.
pub type ForecastEnsemble = Vec<Vec<f64>>;

fn default_prediction_length() -> usize {
    DEFAULT_PREDICTION_LENGTH
}

/// Request body for `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct ForecastRequest {
    /// Observed temperatures, oldest first, ending at "now"
    #[validate(length(min = 1, message = "historical_temps must contain at least one value"))]
    #[schema(example = json!([45.0, 56.0]))]
    pub historical_temps: Vec<f64>,
    /// Number of future steps to forecast
    #[serde(default = "default_prediction_length")]
    // Upper bound must stay equal to MAX_PREDICTION_LENGTH
    #[validate(range(min = 1, max = 512, message = "prediction_length must be between 1 and 512"))]
    #[schema(example = 24)]
    pub prediction_length: usize,
}

impl ForecastRequest {
    pub fn new(historical_temps: Vec<f64>, prediction_length: usize) -> Self {
        Self {
            historical_temps,
            prediction_length,
        }
    }
}

/// Successful response of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastResponse {
    /// `num_samples` trajectories of `prediction_length` values each
    pub forecast: ForecastEnsemble,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_prediction_length() {
        let request: ForecastRequest =
            serde_json::from_str(r#"{"historical_temps": [10.0, 12.0]}"#).unwrap();

        assert_eq!(request.prediction_length, DEFAULT_PREDICTION_LENGTH);
        assert_eq!(request.historical_temps, vec![10.0, 12.0]);
    }

    #[test]
    fn test_request_validation() {
        assert!(ForecastRequest::new(vec![1.0], 24).validate().is_ok());
        assert!(ForecastRequest::new(vec![], 24).validate().is_err());
        assert!(ForecastRequest::new(vec![1.0], 0).validate().is_err());
    }

    #[test]
    fn test_prediction_length_limit_matches_constant() {
        assert!(ForecastRequest::new(vec![1.0], MAX_PREDICTION_LENGTH)
            .validate()
            .is_ok());
        assert!(ForecastRequest::new(vec![1.0], MAX_PREDICTION_LENGTH + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_request_schema_carries_example() {
        let (name, schema) = <ForecastRequest as utoipa::ToSchema>::schema();
        let schema = serde_json::to_value(&schema).unwrap();

        assert_eq!(name, "ForecastRequest");
        assert_eq!(
            schema["properties"]["historical_temps"]["example"],
            serde_json::json!([45.0, 56.0])
        );
    }

    #[test]
    fn test_response_wire_format() {
        let response = ForecastResponse {
            forecast: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"forecast": [[1.0, 2.0], [3.0, 4.0]]}));
    }
}
