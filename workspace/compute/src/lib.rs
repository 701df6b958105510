//! Forecast aggregation and chart composition.
//!
//! [`quantile`] reduces a sampled forecast ensemble to per-step medians and
//! band bounds, [`compose`] aligns those with the observed history on one
//! axis, and [`render`] owns the chart instance at the presentation boundary.

pub mod compose;
pub mod error;
pub mod quantile;
pub mod render;

pub use compose::{
    axis_labels, compose, compose_with_theme, AxisLabel, ChartData, ChartOptions, ChartTheme,
    RenderableSeries, SeriesKey, SeriesStyle,
};
pub use error::{ComputeError, Result};
pub use quantile::{summarize, summarize_for_horizon, summarize_with_band, QuantileBand, StepSummary};
pub use render::{fill_to_previous_order, ChartSlot, ChartSurface};

use tracing::instrument;

/// Turns a forecast response into chart data in one step.
///
/// `horizon` is the number of steps that was requested from the service;
/// an ensemble of any other length is rejected.
#[instrument(skip_all, fields(history_len = history.len(), samples = ensemble.len(), horizon = horizon))]
pub fn render_forecast(history: &[f64], ensemble: &[Vec<f64>], horizon: usize) -> Result<ChartData> {
    let summaries = summarize_for_horizon(ensemble, horizon)?;
    compose(history, &summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_forecast_end_to_end() {
        let history = vec![45.0, 56.0];
        let ensemble = vec![
            vec![50.0, 51.0, 52.0],
            vec![54.0, 55.0, 56.0],
            vec![58.0, 59.0, 60.0],
        ];

        let chart = render_forecast(&history, &ensemble, 3).unwrap();

        assert_eq!(chart.labels, vec!["t-2", "t-1", "t+1", "t+2", "t+3"]);
        assert_eq!(
            chart.get(SeriesKey::Median).unwrap().data,
            vec![None, None, Some(54.0), Some(55.0), Some(56.0)]
        );
        assert_eq!(
            chart.get(SeriesKey::BandUpper).unwrap().data[2..],
            [Some(58.0), Some(59.0), Some(60.0)]
        );
        assert_eq!(
            chart.get(SeriesKey::BandLower).unwrap().data[2..],
            [Some(50.0), Some(51.0), Some(52.0)]
        );
    }

    #[test]
    fn test_render_forecast_rejects_wrong_horizon() {
        let ensemble = vec![vec![1.0, 2.0]];
        let err = render_forecast(&[1.0], &ensemble, 24).unwrap_err();
        assert!(matches!(err, ComputeError::InvalidEnsemble(_)));
    }

    #[test]
    fn test_render_forecast_rejects_empty_ensemble() {
        let err = render_forecast(&[1.0], &[], 24).unwrap_err();
        assert!(matches!(err, ComputeError::InvalidEnsemble(_)));
    }
}
