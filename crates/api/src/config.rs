use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamMode {
    Live,     // Ask the remote provider first, mock data on failure
    Offline,  // Mock data only
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub mode: UpstreamMode,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            upstream: UpstreamConfig {
                mode: UpstreamMode::Live,
                base_url: cases::upstream::DEFAULT_BASE_URL.to_string(),
                timeout_secs: cases::upstream::DEFAULT_TIMEOUT.as_secs(),
            },
        }
    }
}

impl AppConfig {
    pub fn offline() -> Self {
        let mut config = Self::default();
        config.upstream.mode = UpstreamMode::Offline;
        config
    }

    /// Defaults overridden by the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = port
                .parse()
                .with_context(|| format!("PORT must be a number, got {:?}", port))?;
        }
        if let Some(mode) = lookup("UPSTREAM_MODE") {
            config.upstream.mode = match mode.to_lowercase().as_str() {
                "live" => UpstreamMode::Live,
                "offline" => UpstreamMode::Offline,
                other => anyhow::bail!("UPSTREAM_MODE must be live or offline, got {:?}", other),
            };
        }
        if let Some(url) = lookup("UPSTREAM_BASE_URL") {
            config.upstream.base_url = url;
        }
        if let Some(secs) = lookup("UPSTREAM_TIMEOUT_SECS") {
            config.upstream.timeout_secs = secs
                .parse()
                .with_context(|| format!("UPSTREAM_TIMEOUT_SECS must be a number, got {:?}", secs))?;
            if config.upstream.timeout_secs == 0 {
                anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be at least 1");
            }
        }

        Ok(config)
    }
}
