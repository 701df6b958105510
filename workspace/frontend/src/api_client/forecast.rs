use common::{ForecastRequest, ForecastResponse};

use super::post;

/// Request a sampled forecast ensemble for the given history.
pub async fn predict(request: &ForecastRequest) -> Result<ForecastResponse, String> {
    log::debug!(
        "Requesting forecast: {} observations, {} steps",
        request.historical_temps.len(),
        request.prediction_length
    );
    post("/predict", request).await
}
