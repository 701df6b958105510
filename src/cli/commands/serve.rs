use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, ServiceConfig};
use crate::router::create_router;

pub async fn serve(config: &ServiceConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("tempcast starting up");
    debug!("Configuration: {:?}", config);

    if !config.static_dir.is_dir() {
        info!(
            "Static directory {} not found, web UI will not be served",
            config.static_dir.display()
        );
    }

    let state = initialize_app_state(config);

    trace!("Creating application router");
    let app = create_router(state, config);
    debug!("Router created successfully");

    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("tempcast running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
