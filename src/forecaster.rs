//! Sampling forecasters behind `POST /predict`.
//!
//! A forecaster turns the observed history into an ensemble of equally
//! likely future trajectories. The browser reduces the ensemble to a median
//! line and a quantile band, so forecasters only have to sample.

use std::sync::Arc;

use clap::ValueEnum;
use common::ForecastEnsemble;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, trace};

/// Error types for forecast sampling
#[derive(Error, Debug)]
pub enum ForecastError {
    /// No observations to start from
    #[error("Cannot forecast from an empty history")]
    EmptyContext,

    /// Zero steps requested
    #[error("Prediction length must be positive")]
    NoHorizon,

    /// Zero trajectories requested
    #[error("Number of samples must be positive")]
    NoSamples,

    /// The sampling task died before returning
    #[error("Forecast task failed: {0}")]
    Task(String),
}

/// Type alias for Result with ForecastError
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Samples future trajectories from a history.
pub trait Forecaster: Send + Sync {
    /// Short model name reported by the health endpoint.
    fn name(&self) -> &'static str;

    /// Returns `num_samples` trajectories of `prediction_length` values each.
    fn predict(
        &self,
        context: &[f64],
        prediction_length: usize,
        num_samples: usize,
    ) -> Result<ForecastEnsemble>;
}

fn check_request(context: &[f64], prediction_length: usize, num_samples: usize) -> Result<f64> {
    let last = *context.last().ok_or(ForecastError::EmptyContext)?;
    if prediction_length == 0 {
        return Err(ForecastError::NoHorizon);
    }
    if num_samples == 0 {
        return Err(ForecastError::NoSamples);
    }
    Ok(last)
}

/// Repeats the last observation for every step of every sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersistenceForecaster;

impl Forecaster for PersistenceForecaster {
    fn name(&self) -> &'static str {
        "persistence"
    }

    fn predict(
        &self,
        context: &[f64],
        prediction_length: usize,
        num_samples: usize,
    ) -> Result<ForecastEnsemble> {
        let last = check_request(context, prediction_length, num_samples)?;
        Ok(vec![vec![last; prediction_length]; num_samples])
    }
}

/// Random walk driven by the history's own step changes.
///
/// Each trajectory starts at the last observation and, at every step, adds
/// one first difference of the history drawn with replacement. A history
/// with a single value has no differences and yields flat trajectories.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapForecaster {
    seed: Option<u64>,
}

impl BootstrapForecaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the random seed so identical requests get identical ensembles.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Forecaster for BootstrapForecaster {
    fn name(&self) -> &'static str {
        "bootstrap"
    }

    fn predict(
        &self,
        context: &[f64],
        prediction_length: usize,
        num_samples: usize,
    ) -> Result<ForecastEnsemble> {
        let last = check_request(context, prediction_length, num_samples)?;
        let steps: Vec<f64> = context.windows(2).map(|pair| pair[1] - pair[0]).collect();
        debug!(
            "Bootstrapping {} samples from {} step changes",
            num_samples,
            steps.len()
        );

        let mut rng = self.rng();
        let ensemble = (0..num_samples)
            .map(|sample| {
                let mut level = last;
                let trajectory: Vec<f64> = (0..prediction_length)
                    .map(|_| {
                        if !steps.is_empty() {
                            level += steps[rng.gen_range(0..steps.len())];
                        }
                        level
                    })
                    .collect();
                trace!(sample, end = level, "Sampled trajectory");
                trajectory
            })
            .collect();

        Ok(ensemble)
    }
}

/// Forecasters selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    /// Bootstrapped random walk
    Bootstrap,
    /// Last value carried forward
    Persistence,
}

impl ModelKind {
    pub fn build(self, seed: Option<u64>) -> Arc<dyn Forecaster> {
        match self {
            ModelKind::Bootstrap => {
                let forecaster = BootstrapForecaster::new();
                Arc::new(match seed {
                    Some(seed) => forecaster.with_seed(seed),
                    None => forecaster,
                })
            }
            ModelKind::Persistence => Arc::new(PersistenceForecaster),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_repeats_last_value() {
        let ensemble = PersistenceForecaster
            .predict(&[10.0, 12.0, 11.5], 3, 20)
            .unwrap();

        assert_eq!(ensemble.len(), 20);
        assert!(ensemble.iter().all(|t| t == &vec![11.5, 11.5, 11.5]));
    }

    #[test]
    fn test_bootstrap_shape() {
        let ensemble = BootstrapForecaster::new()
            .predict(&[45.0, 56.0, 50.0, 52.0], 24, 20)
            .unwrap();

        assert_eq!(ensemble.len(), 20);
        assert!(ensemble.iter().all(|t| t.len() == 24));
    }

    #[test]
    fn test_bootstrap_constant_steps() {
        // Every step change is +1, so every path climbs by one per step
        let ensemble = BootstrapForecaster::new()
            .predict(&[0.0, 1.0, 2.0], 3, 5)
            .unwrap();

        for trajectory in ensemble {
            assert_eq!(trajectory, vec![3.0, 4.0, 5.0]);
        }
    }

    #[test]
    fn test_bootstrap_single_value_is_flat() {
        let ensemble = BootstrapForecaster::new().predict(&[7.0], 4, 3).unwrap();
        assert_eq!(ensemble, vec![vec![7.0; 4]; 3]);
    }

    #[test]
    fn test_bootstrap_seed_is_reproducible() {
        let history = [10.0, 13.0, 9.0, 11.0, 15.0, 12.0];
        let forecaster = BootstrapForecaster::new().with_seed(42);

        let first = forecaster.predict(&history, 12, 20).unwrap();
        let second = forecaster.predict(&history, 12, 20).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_requests() {
        let forecaster = BootstrapForecaster::new();

        assert!(matches!(
            forecaster.predict(&[], 3, 20),
            Err(ForecastError::EmptyContext)
        ));
        assert!(matches!(
            forecaster.predict(&[1.0], 0, 20),
            Err(ForecastError::NoHorizon)
        ));
        assert!(matches!(
            PersistenceForecaster.predict(&[1.0], 3, 0),
            Err(ForecastError::NoSamples)
        ));
    }

    #[test]
    fn test_model_kind_build() {
        assert_eq!(ModelKind::Bootstrap.build(Some(1)).name(), "bootstrap");
        assert_eq!(ModelKind::Persistence.build(None).name(), "persistence");
    }
}
