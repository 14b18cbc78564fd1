use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub kusto: KustoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KustoConfig {
    /// AAD authority used for the client-credentials token request.
    #[serde(default = "default_authority_host")]
    pub authority_host: String,
    /// Transport timeout applied to every token and query request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for KustoConfig {
    fn default() -> Self {
        Self {
            authority_host: default_authority_host(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_authority_host() -> String {
    "https://login.microsoftonline.com".into()
}

fn default_request_timeout_secs() -> u64 {
    240
}

/// Env var the Functions host sets to tell a custom handler which port to bind.
pub const CUSTOM_HANDLER_PORT_ENV: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Port to bind: the custom-handler port when the host provides one, else `server.port`.
    pub fn listen_port(&self) -> anyhow::Result<u16> {
        match std::env::var(CUSTOM_HANDLER_PORT_ENV) {
            Ok(v) => v.trim().parse::<u16>().map_err(|e| {
                anyhow::anyhow!("{} must be a port number, got {:?}: {}", CUSTOM_HANDLER_PORT_ENV, v, e)
            }),
            Err(_) => Ok(self.server.port),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.kusto.authority_host.starts_with("https://")
                || self.kusto.authority_host.starts_with("http://"),
            "kusto.authority_host must be an http(s) URL, got {:?}",
            self.kusto.authority_host
        );
        anyhow::ensure!(
            self.kusto.request_timeout_secs > 0,
            "kusto.request_timeout_secs must be > 0, got {}",
            self.kusto.request_timeout_secs
        );
        Ok(())
    }
}
