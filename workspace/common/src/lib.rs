//! Common transport-layer types shared between the forecasting service and
//! the browser component, plus parsing of the user's free-text input.

mod forecast;
mod input;

pub use forecast::{
    ForecastEnsemble, ForecastRequest, ForecastResponse, DEFAULT_PREDICTION_LENGTH,
    MAX_PREDICTION_LENGTH,
};
pub use input::{parse_history, parse_horizon, InputError};
