use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// The forecast ensemble is empty, ragged, or does not match the requested horizon
    #[error("Invalid forecast ensemble: {0}")]
    InvalidEnsemble(String),

    /// There are no forecast steps to draw
    #[error("Forecast is empty: nothing to plot after the last observation")]
    EmptyForecast,

    /// There are no historical observations to anchor the chart
    #[error("Historical series is empty")]
    EmptyHistory,

    /// The requested quantile band is outside `0 <= lower <= 0.5 <= upper <= 1`
    #[error("Invalid quantile band: lower={lower}, upper={upper}")]
    InvalidBand { lower: f64, upper: f64 },
}

impl ComputeError {
    /// Builds an `InvalidEnsemble` error and records it.
    pub(crate) fn invalid_ensemble(reason: impl Into<String>) -> Self {
        let err = ComputeError::InvalidEnsemble(reason.into());
        error!(?err, "Rejected forecast ensemble");
        err
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
