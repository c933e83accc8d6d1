use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

pub const DEFAULT_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub hf_api_token: Option<String>,
    pub summarizer_model: String,
    pub summarizer_endpoint: String,
    pub summarizer_warmup: bool,
    pub transcript_languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000),
            hf_api_token: None,
            summarizer_model: DEFAULT_MODEL.to_string(),
            summarizer_endpoint: DEFAULT_ENDPOINT.to_string(),
            summarizer_warmup: true,
            transcript_languages: vec!["en".to_string()],
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults
    /// for unset or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Config::default();

        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = get("PORT").unwrap_or_else(|| defaults.server_addr.port().to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let summarizer_warmup = match get("SUMMARIZER_WARMUP") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| AppError::ConfigError(format!("Invalid SUMMARIZER_WARMUP: {}", value)))?,
            None => defaults.summarizer_warmup,
        };

        let transcript_languages = match get("TRANSCRIPT_LANGUAGES") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|lang| !lang.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.transcript_languages,
        };

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            hf_api_token: get("HF_API_TOKEN"),
            summarizer_model: get("SUMMARIZER_MODEL").unwrap_or(defaults.summarizer_model),
            summarizer_endpoint: get("SUMMARIZER_ENDPOINT").unwrap_or(defaults.summarizer_endpoint),
            summarizer_warmup,
            transcript_languages,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.hf_api_token, None);
        assert_eq!(config.summarizer_model, DEFAULT_MODEL);
        assert_eq!(config.summarizer_endpoint, DEFAULT_ENDPOINT);
        assert!(config.summarizer_warmup);
        assert_eq!(config.transcript_languages, vec!["en"]);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("HF_API_TOKEN", "hf_secret"),
            ("SUMMARIZER_MODEL", "facebook/bart-large-cnn"),
            ("SUMMARIZER_WARMUP", "off"),
            ("TRANSCRIPT_LANGUAGES", "de, en ,"),
        ])
        .unwrap();

        assert_eq!(config.server_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.hf_api_token.as_deref(), Some("hf_secret"));
        assert_eq!(config.summarizer_model, "facebook/bart-large-cnn");
        assert!(!config.summarizer_warmup);
        assert_eq!(config.transcript_languages, vec!["de", "en"]);
    }

    #[test]
    fn blank_token_counts_as_unset() {
        let config = config_from(&[("HF_API_TOKEN", "  ")]).unwrap();
        assert_eq!(config.hf_api_token, None);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        assert!(matches!(config_from(&[("PORT", "http")]), Err(AppError::ConfigError(_))));
        assert!(matches!(config_from(&[("HOST", "localhost:1")]), Err(AppError::ConfigError(_))));
        assert!(matches!(
            config_from(&[("SUMMARIZER_WARMUP", "maybe")]),
            Err(AppError::ConfigError(_))
        ));
    }
}
