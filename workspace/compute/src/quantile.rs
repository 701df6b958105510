//! Per-step summaries of a sampled forecast ensemble.
//!
//! Every trajectory in an ensemble covers the same future horizon. For each
//! step the values of all trajectories are sorted and three ranks are read
//! out: the median and the two band bounds. Ranks are truncated, never
//! interpolated, and an even-sized ensemble reports its upper median.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::error::{ComputeError, Result};

/// Median and band bounds of one forecast step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepSummary {
    pub median: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Quantile levels used for the lower and upper band bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileBand {
    pub lower: f64,
    pub upper: f64,
}

impl Default for QuantileBand {
    /// The 10-90% band.
    fn default() -> Self {
        Self {
            lower: 0.1,
            upper: 0.9,
        }
    }
}

impl QuantileBand {
    /// Creates a band, checking `0 <= lower <= 0.5 <= upper <= 1`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        let band = Self { lower, upper };
        band.validate()?;
        Ok(band)
    }

    fn validate(&self) -> Result<()> {
        if (0.0..=0.5).contains(&self.lower) && (0.5..=1.0).contains(&self.upper) {
            Ok(())
        } else {
            Err(ComputeError::InvalidBand {
                lower: self.lower,
                upper: self.upper,
            })
        }
    }
}

/// Zero-based rank of quantile `q` in a sorted list of `n` values.
///
/// Truncates `n * q` and clamps the result to the last index, so `q = 1.0`
/// or a rounding overshoot never reads past the end.
pub fn quantile_rank(n: usize, q: f64) -> usize {
    let rank = (n as f64 * q).floor() as usize;
    rank.min(n.saturating_sub(1))
}

/// Checks that the ensemble is non-empty and rectangular, returning its horizon.
pub fn ensemble_horizon(ensemble: &[Vec<f64>]) -> Result<usize> {
    let first = ensemble
        .first()
        .ok_or_else(|| ComputeError::invalid_ensemble("ensemble contains no trajectories"))?;

    let horizon = first.len();
    if horizon == 0 {
        return Err(ComputeError::invalid_ensemble("trajectories have no forecast steps"));
    }

    if let Some((index, trajectory)) = ensemble
        .iter()
        .enumerate()
        .find(|(_, trajectory)| trajectory.len() != horizon)
    {
        return Err(ComputeError::invalid_ensemble(format!(
            "trajectory {} has {} steps, expected {}",
            index,
            trajectory.len(),
            horizon
        )));
    }

    Ok(horizon)
}

/// Summarizes the ensemble with the default 10-90% band.
pub fn summarize(ensemble: &[Vec<f64>]) -> Result<Vec<StepSummary>> {
    summarize_with_band(ensemble, QuantileBand::default())
}

/// Summarizes the ensemble and checks it covers exactly `horizon` steps.
///
/// The forecasting service is asked for a given horizon; a response with a
/// different trajectory length would misalign the chart axis.
pub fn summarize_for_horizon(ensemble: &[Vec<f64>], horizon: usize) -> Result<Vec<StepSummary>> {
    let actual = ensemble_horizon(ensemble)?;
    if actual != horizon {
        return Err(ComputeError::invalid_ensemble(format!(
            "trajectories have {} steps but {} were requested",
            actual, horizon
        )));
    }
    summarize(ensemble)
}

/// Summarizes the ensemble, reading the band bounds at the given quantiles.
#[instrument(skip(ensemble), fields(samples = ensemble.len()))]
pub fn summarize_with_band(ensemble: &[Vec<f64>], band: QuantileBand) -> Result<Vec<StepSummary>> {
    band.validate()?;
    let horizon = ensemble_horizon(ensemble)?;
    let n = ensemble.len();

    let median_rank = quantile_rank(n, 0.5);
    let lower_rank = quantile_rank(n, band.lower);
    let upper_rank = quantile_rank(n, band.upper);
    debug!(
        horizon,
        median_rank, lower_rank, upper_rank, "Summarizing forecast ensemble"
    );

    let mut column = Vec::with_capacity(n);
    let summaries = (0..horizon)
        .map(|step| {
            column.clear();
            column.extend(ensemble.iter().map(|trajectory| trajectory[step]));
            column.sort_by(f64::total_cmp);

            let summary = StepSummary {
                median: column[median_rank],
                lower: column[lower_rank],
                upper: column[upper_rank],
            };
            trace!(step, ?summary, "Step summarized");
            summary
        })
        .collect();

    Ok(summaries)
}
