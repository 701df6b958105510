use axum::{extract::State, http::StatusCode, response::Json};
use axum_valid::Valid;
use common::{ForecastRequest, ForecastResponse};
use tracing::{debug, error, info, instrument, trace};

use crate::forecaster::ForecastError;
use crate::schemas::AppState;

/// Sample a probabilistic forecast
///
/// Returns `num_samples` trajectories, each `prediction_length` steps long.
/// Errors are reported as plain text.
#[utoipa::path(
    post,
    path = "/predict",
    tag = "forecast",
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "Forecast sampled successfully", body = ForecastResponse),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 500, description = "Forecasting failed", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip_all)]
pub async fn predict(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<ForecastRequest>>,
) -> Result<Json<ForecastResponse>, (StatusCode, String)> {
    let ForecastRequest {
        historical_temps,
        prediction_length,
    } = request;

    info!(
        "Received request with {} historical temps, prediction length {}",
        historical_temps.len(),
        prediction_length
    );
    trace!("Request data: {:?}", historical_temps);

    let forecaster = state.forecaster.clone();
    let num_samples = state.num_samples;

    let sampled = tokio::task::spawn_blocking(move || {
        forecaster.predict(&historical_temps, prediction_length, num_samples)
    })
    .await
    .map_err(|e| ForecastError::Task(e.to_string()))
    .and_then(|result| result);

    match sampled {
        Ok(forecast) => {
            debug!(
                "Forecast generated with shape ({}, {})",
                forecast.len(),
                prediction_length
            );
            info!("Request completed successfully");
            Ok(Json(ForecastResponse { forecast }))
        }
        Err(e) => {
            error!("Forecasting failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
