#[cfg(test)]
pub mod test_utils {
    use crate::config::{initialize_app_state, ServiceConfig};
    use crate::forecaster::ModelKind;
    use crate::router::create_router;
    use axum::Router;
    use std::path::PathBuf;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Configuration used by the integration tests.
    ///
    /// Uses the persistence forecaster so responses are exact, and serves the
    /// repository's `static` directory.
    pub fn test_config() -> ServiceConfig {
        ServiceConfig {
            bind_address: "127.0.0.1:0".to_string(),
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
            model: ModelKind::Persistence,
            num_samples: 20,
            seed: None,
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. Only the first call installs a
    /// subscriber; later calls are no-ops.
    fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    /// Create axum app for testing from a configuration
    pub fn setup_test_app_with(config: &ServiceConfig) -> Router {
        init_test_tracing();

        let state = initialize_app_state(config);
        create_router(state, config)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        setup_test_app_with(&test_config())
    }
}
