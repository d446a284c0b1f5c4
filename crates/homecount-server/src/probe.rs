//! One-shot startup probe against a public IP-echo endpoint.
//!
//! Fire-and-forget: the outcome is a single log line, success or failure,
//! and nothing else. No retry, and the result never reaches request
//! handling.

use homecount_core::error::{HomecountError, Result};
use homecount_core::ipecho;

/// Fetch the caller's public IP from an IP-echo endpoint.
pub async fn fetch_public_ip(client: &reqwest::Client, url: &str) -> Result<String> {
    let body = client
        .get(url)
        .send()
        .await
        .map_err(|e| HomecountError::Request(e.to_string()))?
        .text()
        .await
        .map_err(|e| HomecountError::Request(e.to_string()))?;
    Ok(ipecho::parse(&body)?.ip)
}

/// The single line the probe logs.
pub fn report_line(outcome: &Result<String>) -> String {
    match outcome {
        Ok(ip) => format!("Your IP address is {ip}"),
        Err(e) => format!("Error: {e}"),
    }
}

/// Run the probe once and log the outcome.
pub async fn announce_public_ip(url: &str) {
    let client = reqwest::Client::new();
    let outcome = fetch_public_ip(&client, url).await;
    match &outcome {
        Ok(_) => tracing::info!("{}", report_line(&outcome)),
        Err(_) => tracing::error!("{}", report_line(&outcome)),
    }
}
