pub mod forecast;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Common POST request handler.
///
/// The forecast service answers failures with a plain-text body, which is
/// returned as the error message when present.
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        let error_msg = match response.text().await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => format!("HTTP error: {}", response.status()),
        };
        log::error!("POST {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let parsed: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(parsed)
}
