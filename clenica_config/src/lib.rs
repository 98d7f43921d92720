use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Prefix for environment variable overrides (`CLENICA_MAIL__API_KEY` etc.).
pub const ENV_PREFIX: &str = "CLENICA";

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

/// Settings for the transactional email provider. Each field is optional so
/// that a partially configured process still starts; the contact endpoint
/// reports a configuration error until all of them are present.
#[derive(Debug, Default, Deserialize)]
pub struct MailConfig {
    /// Provider API key.
    pub api_key: Option<String>,
    /// Operator mailbox that receives enquiry notifications.
    pub forward_to: Option<String>,
    /// Sender identity used as the "from" address for all outbound mail.
    /// May carry a display name (`ClenicaCare <noreply@clenicacare.com>`).
    pub from: Option<String>,
    /// Overrides the provider endpoint, for tests.
    pub endpoint_override: Option<Url>,
}
