//! Ownership of the live chart instance.
//!
//! A charting surface draws a [`ChartData`] into some backend-specific
//! instance. The slot keeps one installed instance: the previous chart is
//! torn down only once the new one has been drawn, and a failed composition
//! never reaches the surface, so the last good chart stays on screen.

use std::fmt;

use tracing::{debug, warn};

use crate::compose::{ChartData, RenderableSeries};
use crate::error::ComputeError;

/// Orders series for surfaces that can only fill towards the previous trace.
///
/// Each fill target is moved directly in front of the series shaded towards
/// it; every other series keeps its composed position.
pub fn fill_to_previous_order(series: &[RenderableSeries]) -> Vec<&RenderableSeries> {
    let is_target = |candidate: &RenderableSeries| {
        series
            .iter()
            .any(|other| other.key != candidate.key && other.fill_target == Some(candidate.key))
    };

    let mut ordered = Vec::with_capacity(series.len());
    for current in series {
        if is_target(current) {
            continue;
        }
        if let Some(target) = current
            .fill_target
            .filter(|key| *key != current.key)
            .and_then(|key| series.iter().find(|s| s.key == key))
        {
            ordered.push(target);
        }
        ordered.push(current);
    }
    ordered
}

/// A place charts can be drawn on, e.g. a Plotly div in the browser.
pub trait ChartSurface {
    /// Handle to a drawn chart.
    type Instance;
    type Error: fmt::Display;

    /// Draws `chart` as a new instance without touching existing ones.
    fn draw(&mut self, chart: &ChartData) -> Result<Self::Instance, Self::Error>;

    fn destroy(&mut self, instance: Self::Instance);
}

/// Holds the chart currently shown on a surface.
pub struct ChartSlot<S: ChartSurface> {
    surface: S,
    current: Option<S::Instance>,
}

impl<S: ChartSurface> ChartSlot<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    pub fn is_installed(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&S::Instance> {
        self.current.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Draws `chart`, then destroys the previous chart and installs the new one.
    ///
    /// A failed draw leaves the previous chart installed.
    pub fn replace(&mut self, chart: &ChartData) -> Result<(), S::Error> {
        let instance = self.surface.draw(chart)?;

        if let Some(previous) = self.current.replace(instance) {
            debug!("Destroying previous chart instance");
            self.surface.destroy(previous);
        }
        debug!(positions = chart.len(), "Installed new chart instance");
        Ok(())
    }

    /// Installs a freshly composed chart, or reports why composition failed.
    ///
    /// On failure the current chart is left untouched and the error text is
    /// returned for display.
    pub fn apply(&mut self, composed: Result<ChartData, ComputeError>) -> Result<(), String> {
        match composed {
            Ok(chart) => self.replace(&chart).map_err(|e| e.to_string()),
            Err(e) => {
                warn!("Keeping previous chart, composition failed: {}", e);
                Err(e.to_string())
            }
        }
    }

    /// Destroys the current chart, leaving the slot empty.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.surface.destroy(previous);
        }
    }
}
