//! IP-echo wire contract (JSON).
//!
//! The public IP-echo endpoint answers `{"ip":"<dotted-quad>"}`. Parsing is
//! strict: anything else in the body is a `Malformed` error.

use serde::Deserialize;

use crate::error::{HomecountError, Result};

/// Body returned by the IP-echo endpoint.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IpEcho {
    /// Caller's public address.
    pub ip: String,
}

/// Strictly parse an IP-echo response body.
pub fn parse(body: &str) -> Result<IpEcho> {
    serde_json::from_str(body).map_err(|e| HomecountError::Malformed(e.to_string()))
}
