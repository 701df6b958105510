use crate::config::ServiceConfig;
use crate::handlers::{forecast::predict, health::health_check};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
///
/// Anything that is not an API route is served from the static directory,
/// so `/` returns the web UI's `index.html`.
pub fn create_router(state: AppState, config: &ServiceConfig) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Forecast
        .route("/predict", post(predict))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Web UI
        .fallback_service(ServeDir::new(&config.static_dir))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
