use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_docs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // An empty PORT counts as unset
        let port = env::var("PORT")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let api_docs = env::var("API_DOCS")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .context("API_DOCS must be either 'true' or 'false'")?;

        Ok(Config {
            host,
            port,
            api_docs,
        })
    }

    /// Address the listener binds to, as `host:port`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.socket_addr());
        tracing::info!("  API docs: {}",
            if self.api_docs { "enabled (/swagger-ui)" } else { "disabled" });
    }
}
