use std::sync::Arc;

use common::{ForecastRequest, ForecastResponse};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::forecaster::Forecaster;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Model used to sample forecast trajectories
    pub forecaster: Arc<dyn Forecaster>,
    /// Number of trajectories drawn per request
    pub num_samples: usize,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Name of the loaded forecaster
    pub model: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forecast::predict,
    ),
    components(
        schemas(
            ForecastRequest,
            ForecastResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecast", description = "Probabilistic temperature forecasts"),
    ),
    info(
        title = "tempcast API",
        description = "Grid temperature forecasting API returning sampled forecast trajectories",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
