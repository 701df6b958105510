use anyhow::{Context, Result};
use common::parse_history;
use compute::render_forecast;
use tracing::{debug, info};

use crate::forecaster::ModelKind;

/// Samples a forecast without starting the server and prints the chart data.
pub fn predict(
    history: &str,
    horizon: usize,
    model: ModelKind,
    num_samples: usize,
    seed: Option<u64>,
) -> Result<()> {
    let history = parse_history(history).context("Invalid --history")?;
    info!(
        "Forecasting {} steps from {} observations",
        horizon,
        history.len()
    );

    let forecaster = model.build(seed);
    let ensemble = forecaster
        .predict(&history, horizon, num_samples)
        .context("Forecasting failed")?;
    debug!("Sampled {} trajectories", ensemble.len());

    let chart = render_forecast(&history, &ensemble, horizon)
        .context("Could not build chart series")?;

    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}
