//! Chart series composition.
//!
//! Lines up the observed history and the per-step forecast summaries on one
//! shared axis. The first `H` positions belong to the past and the next `F`
//! to the forecast; every series spans all `H + F` positions and uses `None`
//! where it has nothing to draw.

use std::fmt;
use std::iter;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};
use crate::quantile::StepSummary;

/// Identifies one of the four composed series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKey {
    History,
    Median,
    BandUpper,
    BandLower,
}

/// Position on the shared time axis, relative to the last observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLabel {
    /// `k` steps before now, `k >= 1`
    Past(usize),
    /// `k` steps ahead, `k >= 1`
    Future(usize),
}

impl fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisLabel::Past(steps) => write!(f, "t-{}", steps),
            AxisLabel::Future(steps) => write!(f, "t+{}", steps),
        }
    }
}

/// Builds the axis: furthest past first up to `t-1`, then `t+1` onwards.
pub fn axis_labels(history_len: usize, horizon: usize) -> Vec<AxisLabel> {
    (0..history_len)
        .map(|i| AxisLabel::Past(history_len - i))
        .chain((0..horizon).map(|j| AxisLabel::Future(j + 1)))
        .collect()
}

/// Display attributes handed to the charting surface untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub border_color: String,
    pub background_color: String,
    pub tension: Option<f64>,
    pub point_radius: Option<f64>,
}

impl SeriesStyle {
    fn line(color: &str, point_radius: f64) -> Self {
        Self {
            border_color: color.to_string(),
            background_color: color.to_string(),
            tension: Some(0.2),
            point_radius: Some(point_radius),
        }
    }

    fn band(background_color: &str) -> Self {
        Self {
            border_color: "transparent".to_string(),
            background_color: background_color.to_string(),
            tension: None,
            point_radius: None,
        }
    }
}

/// Chart-wide options, also passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub legend_position: String,
    pub y_axis_title: String,
}

/// Names and styles for every series plus the chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub history_label: String,
    pub median_label: String,
    pub band_upper_label: String,
    pub band_lower_label: String,
    pub history: SeriesStyle,
    pub median: SeriesStyle,
    pub band_upper: SeriesStyle,
    pub band_lower: SeriesStyle,
    pub options: ChartOptions,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            history_label: "History".to_string(),
            median_label: "Median Forecast".to_string(),
            band_upper_label: "10-90% band".to_string(),
            band_lower_label: "lower".to_string(),
            history: SeriesStyle::line("#111827", 3.0),
            median: SeriesStyle::line("#2563eb", 2.0),
            band_upper: SeriesStyle::band("rgba(37,99,235,0.12)"),
            band_lower: SeriesStyle::band("rgba(0,0,0,0)"),
            options: ChartOptions {
                legend_position: "top".to_string(),
                y_axis_title: "Temperature".to_string(),
            },
        }
    }
}

/// One drawable series aligned to the chart labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableSeries {
    pub key: SeriesKey,
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub style: SeriesStyle,
    /// Series this one is shaded towards, if any.
    pub fill_target: Option<SeriesKey>,
}

/// Everything a charting surface needs to draw the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    /// Always `[history, median, band_upper, band_lower]`.
    pub series: Vec<RenderableSeries>,
    pub options: ChartOptions,
}

impl ChartData {
    pub fn get(&self, key: SeriesKey) -> Option<&RenderableSeries> {
        self.series.iter().find(|series| series.key == key)
    }

    /// Number of positions on the axis.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Composes the chart with the default theme.
pub fn compose(history: &[f64], summaries: &[StepSummary]) -> Result<ChartData> {
    compose_with_theme(history, summaries, &ChartTheme::default())
}

/// Composes the history line, median line and quantile band on one axis.
#[instrument(skip_all, fields(history = history.len(), horizon = summaries.len()))]
pub fn compose_with_theme(
    history: &[f64],
    summaries: &[StepSummary],
    theme: &ChartTheme,
) -> Result<ChartData> {
    if summaries.is_empty() {
        return Err(ComputeError::EmptyForecast);
    }
    if history.is_empty() {
        return Err(ComputeError::EmptyHistory);
    }

    let past = history.len();
    let labels = axis_labels(past, summaries.len())
        .iter()
        .map(ToString::to_string)
        .collect();

    let forecast_line = |pick: fn(&StepSummary) -> f64| -> Vec<Option<f64>> {
        iter::repeat(None)
            .take(past)
            .chain(summaries.iter().map(|summary| Some(pick(summary))))
            .collect()
    };

    let history_series = RenderableSeries {
        key: SeriesKey::History,
        label: theme.history_label.clone(),
        data: history
            .iter()
            .copied()
            .map(Some)
            .chain(iter::repeat(None).take(summaries.len()))
            .collect(),
        style: theme.history.clone(),
        fill_target: None,
    };

    let median_series = RenderableSeries {
        key: SeriesKey::Median,
        label: theme.median_label.clone(),
        data: forecast_line(|summary| summary.median),
        style: theme.median.clone(),
        fill_target: None,
    };

    let band_upper_series = RenderableSeries {
        key: SeriesKey::BandUpper,
        label: theme.band_upper_label.clone(),
        data: forecast_line(|summary| summary.upper),
        style: theme.band_upper.clone(),
        fill_target: Some(SeriesKey::BandLower),
    };

    let band_lower_series = RenderableSeries {
        key: SeriesKey::BandLower,
        label: theme.band_lower_label.clone(),
        data: forecast_line(|summary| summary.lower),
        style: theme.band_lower.clone(),
        fill_target: None,
    };

    debug!("Composed forecast chart series");

    Ok(ChartData {
        labels,
        series: vec![
            history_series,
            median_series,
            band_upper_series,
            band_lower_series,
        ],
        options: theme.options.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries() -> Vec<StepSummary> {
        vec![
            StepSummary {
                median: 12.0,
                lower: 10.0,
                upper: 14.0,
            },
            StepSummary {
                median: 13.0,
                lower: 10.5,
                upper: 15.5,
            },
        ]
    }

    #[test]
    fn test_axis_labels() {
        let labels: Vec<String> = axis_labels(3, 2).iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["t-3", "t-2", "t-1", "t+1", "t+2"]);
    }

    #[test]
    fn test_every_series_spans_the_axis() {
        let history = [9.0, 11.0, 10.5];
        let chart = compose(&history, &summaries()).unwrap();

        assert_eq!(chart.len(), 5);
        assert_eq!(chart.series.len(), 4);
        for series in &chart.series {
            assert_eq!(series.data.len(), 5, "series {:?}", series.key);
        }
    }

    #[test]
    fn test_history_stops_at_now() {
        let history = [9.0, 11.0, 10.5];
        let chart = compose(&history, &summaries()).unwrap();

        let line = chart.get(SeriesKey::History).unwrap();
        assert_eq!(
            line.data,
            vec![Some(9.0), Some(11.0), Some(10.5), None, None]
        );
    }

    #[test]
    fn test_forecast_series_start_after_history() {
        let history = [9.0, 11.0, 10.5];
        let chart = compose(&history, &summaries()).unwrap();

        let median = chart.get(SeriesKey::Median).unwrap();
        let upper = chart.get(SeriesKey::BandUpper).unwrap();
        let lower = chart.get(SeriesKey::BandLower).unwrap();

        assert_eq!(median.data, vec![None, None, None, Some(12.0), Some(13.0)]);
        assert_eq!(upper.data, vec![None, None, None, Some(14.0), Some(15.5)]);
        assert_eq!(lower.data, vec![None, None, None, Some(10.0), Some(10.5)]);
    }

    #[test]
    fn test_series_order_and_fill_reference() {
        let chart = compose(&[1.0], &summaries()).unwrap();

        let keys: Vec<SeriesKey> = chart.series.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![
                SeriesKey::History,
                SeriesKey::Median,
                SeriesKey::BandUpper,
                SeriesKey::BandLower
            ]
        );

        // The band is shaded from the upper bound down to the series right after it
        assert_eq!(chart.series[2].fill_target, Some(SeriesKey::BandLower));
        assert_eq!(chart.series[3].key, SeriesKey::BandLower);
        assert!(chart
            .series
            .iter()
            .filter(|s| s.key != SeriesKey::BandUpper)
            .all(|s| s.fill_target.is_none()));
    }

    #[test]
    fn test_band_lower_is_invisible() {
        let chart = compose(&[1.0], &summaries()).unwrap();
        let lower = chart.get(SeriesKey::BandLower).unwrap();

        assert_eq!(lower.style.border_color, "transparent");
        assert_eq!(lower.style.background_color, "rgba(0,0,0,0)");
    }

    #[test]
    fn test_theme_is_passed_through() {
        let mut theme = ChartTheme::default();
        theme.median_label = "P50".to_string();
        theme.options.y_axis_title = "Load".to_string();

        let chart = compose_with_theme(&[1.0], &summaries(), &theme).unwrap();

        assert_eq!(chart.get(SeriesKey::Median).unwrap().label, "P50");
        assert_eq!(chart.options.y_axis_title, "Load");
    }

    #[test]
    fn test_empty_forecast_is_rejected() {
        assert_eq!(compose(&[1.0, 2.0], &[]), Err(ComputeError::EmptyForecast));
    }

    #[test]
    fn test_empty_history_is_rejected() {
        assert_eq!(compose(&[], &summaries()), Err(ComputeError::EmptyHistory));
    }

    #[test]
    fn test_series_key_wire_names() {
        let json = serde_json::to_string(&SeriesKey::BandLower).unwrap();
        assert_eq!(json, "\"bandLower\"");
    }
}
