use std::net::SocketAddr;
use std::time::Duration;

use crate::tts::elevenlabs::ELEVENLABS_BASE_URL;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_number(&lookup, "PORT", 3000u16)?;
        let timeout_secs = parse_number(&lookup, "ELEVENLABS_TIMEOUT_SECS", 60u64)?;

        // An empty key means synthesis is disabled, same as an unset one
        let api_key = lookup("ELEVENLABS_API_KEY").filter(|k| !k.is_empty());

        let base_url =
            lookup("ELEVENLABS_BASE_URL").unwrap_or_else(|| ELEVENLABS_BASE_URL.to_string());

        Ok(Self {
            host,
            port,
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}
