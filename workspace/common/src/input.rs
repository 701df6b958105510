use thiserror::Error;
use tracing::debug;

/// Why the user's history text could not be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Enter at least one historical temperature")]
    Empty,

    #[error("Could not parse numbers from input")]
    NoNumbers,
}

/// Parses a comma-separated list of temperatures.
///
/// Entries that are not finite numbers are dropped; the remaining values
/// keep their order.
pub fn parse_history(text: &str) -> Result<Vec<f64>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let values: Vec<f64> = text
        .split(',')
        .filter_map(|entry| entry.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect();

    if values.is_empty() {
        return Err(InputError::NoNumbers);
    }

    debug!("Parsed {} historical values", values.len());
    Ok(values)
}

/// Parses the forecast horizon, falling back to `default` unless the text
/// is a positive integer.
pub fn parse_horizon(text: &str, default: usize) -> usize {
    match text.trim().parse::<usize>() {
        Ok(horizon) if horizon > 0 => horizon,
        _ => default,
    }
}
