//! Shared error type across homecount crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, HomecountError>;

/// Unified error type used by core and server.
///
/// Nothing here retries or distinguishes transient from permanent failure:
/// config errors abort startup, probe errors become a single log line.
#[derive(Debug, Error)]
pub enum HomecountError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("malformed ip-echo body: {0}")]
    Malformed(String),
}
