use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::ServiceConfig;
use crate::forecaster::ModelKind;
use commands::{predict, serve};

#[derive(Parser)]
#[command(name = "tempcast")]
#[command(about = "Temperature forecasting service with a probabilistic forecast chart")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,

        /// Directory served as the web UI (index.html and the wasm bundle)
        #[arg(long, env = "STATIC_DIR", default_value = "static")]
        static_dir: PathBuf,

        /// Forecasting model
        #[arg(short, long, env = "FORECAST_MODEL", value_enum, default_value_t = ModelKind::Bootstrap)]
        model: ModelKind,

        /// Number of trajectories sampled per request
        #[arg(short = 'n', long, env = "FORECAST_SAMPLES", default_value_t = 20)]
        num_samples: usize,

        /// Fixed random seed for reproducible forecasts
        #[arg(long, env = "FORECAST_SEED")]
        seed: Option<u64>,
    },
    /// Sample one forecast locally and print the chart series as JSON
    ///
    /// Example:
    ///   tempcast predict --history "45,56,52,49" --horizon 12
    Predict {
        /// Comma-separated historical temperatures, oldest first
        #[arg(long)]
        history: String,

        /// Number of future steps
        #[arg(long, default_value_t = common::DEFAULT_PREDICTION_LENGTH)]
        horizon: usize,

        /// Forecasting model
        #[arg(short, long, value_enum, default_value_t = ModelKind::Bootstrap)]
        model: ModelKind,

        /// Number of trajectories to sample
        #[arg(short = 'n', long, default_value_t = 20)]
        num_samples: usize,

        /// Fixed random seed for reproducible forecasts
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                static_dir,
                model,
                num_samples,
                seed,
            } => {
                let config = ServiceConfig {
                    bind_address,
                    static_dir,
                    model,
                    num_samples,
                    seed,
                };
                serve(&config).await?;
            }
            Commands::Predict {
                history,
                horizon,
                model,
                num_samples,
                seed,
            } => {
                predict(&history, horizon, model, num_samples, seed)?;
            }
        }
        Ok(())
    }
}
