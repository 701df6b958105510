use std::path::PathBuf;

use tracing::{debug, info};

use crate::forecaster::ModelKind;
use crate::schemas::AppState;

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Directory holding `index.html` and the wasm bundle
    pub static_dir: PathBuf,
    /// Forecaster behind `/predict`
    pub model: ModelKind,
    /// Trajectories sampled per request
    pub num_samples: usize,
    /// Fixed sampling seed, random when unset
    pub seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            static_dir: PathBuf::from("static"),
            model: ModelKind::Bootstrap,
            num_samples: 20,
            seed: None,
        }
    }
}

/// Initialize application state from configuration
pub fn initialize_app_state(config: &ServiceConfig) -> AppState {
    let forecaster = config.model.build(config.seed);
    info!("Loaded {} forecaster", forecaster.name());
    debug!(
        "Sampling {} trajectories per request (seed: {:?})",
        config.num_samples, config.seed
    );

    AppState {
        forecaster,
        num_samples: config.num_samples,
    }
}
