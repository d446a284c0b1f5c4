use serde::Deserialize;

use homecount_core::error::{HomecountError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub probe: ProbeSection,

    #[serde(default)]
    pub greeter: GreeterSection,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HomecountError::Config(
                "version must be 1".into(),
            ));
        }

        self.probe.validate()?;
        self.greeter.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeSection {
    #[serde(default = "default_probe_enabled")]
    pub enabled: bool,

    #[serde(default = "default_probe_url")]
    pub url: String,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self {
            enabled: default_probe_enabled(),
            url: default_probe_url(),
        }
    }
}

impl ProbeSection {
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(HomecountError::Config(
                "probe.url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_probe_enabled() -> bool {
    true
}
fn default_probe_url() -> String {
    "https://api.ipify.org?format=json".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreeterSection {
    #[serde(default = "default_greeter_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "default_greeter_message")]
    pub message: String,
}

impl Default for GreeterSection {
    fn default() -> Self {
        Self {
            interval_ms: default_greeter_interval_ms(),
            message: default_greeter_message(),
        }
    }
}

impl GreeterSection {
    pub fn validate(&self) -> Result<()> {
        if !(1000..=3_600_000).contains(&self.interval_ms) {
            return Err(HomecountError::Config(
                "greeter.interval_ms must be between 1000 and 3600000".into(),
            ));
        }
        if self.message.is_empty() {
            return Err(HomecountError::Config(
                "greeter.message must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_greeter_interval_ms() -> u64 {
    60000
}
fn default_greeter_message() -> String {
    "Hello!".into()
}
