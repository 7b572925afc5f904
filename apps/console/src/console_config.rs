use std::env;
use std::time::Duration;

use campus_application::DEFAULT_TOAST_DURATION;
use campus_core::{AppError, AppResult};
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_HTTP_TIMEOUT_MS: u64 = 15_000;

/// Runtime configuration of the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_base_url: Url,
    pub http_timeout: Duration,
    pub toast_duration: Duration,
    pub offline: bool,
}

impl ConsoleConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let raw_base_url =
            lookup("CONSOLE_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let api_base_url = Url::parse(raw_base_url.trim()).map_err(|error| {
            AppError::Validation(format!(
                "invalid CONSOLE_API_BASE_URL value '{raw_base_url}': {error}"
            ))
        })?;

        let http_timeout = Duration::from_millis(parse_u64(
            &lookup,
            "CONSOLE_HTTP_TIMEOUT_MS",
            DEFAULT_HTTP_TIMEOUT_MS,
        )?);
        let default_toast_ms = u64::try_from(DEFAULT_TOAST_DURATION.as_millis()).unwrap_or(4_000);
        let toast_duration = Duration::from_millis(parse_u64(
            &lookup,
            "CONSOLE_TOAST_DURATION_MS",
            default_toast_ms,
        )?);
        let offline = lookup("CONSOLE_OFFLINE")
            .map(|value| parse_bool("CONSOLE_OFFLINE", &value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            api_base_url,
            http_timeout,
            toast_duration,
            offline,
        })
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn parse_u64(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
) -> AppResult<u64> {
    match lookup(name) {
        Some(value) => value.trim().parse::<u64>().map_err(|error| {
            AppError::Validation(format!("invalid {name} value '{value}': {error}"))
        }),
        None => Ok(default),
    }
}

fn parse_bool(name: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Validation(format!(
            "invalid {name} value '{value}': expected a boolean"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use campus_core::AppResult;

    use super::ConsoleConfig;

    fn config(vars: &[(&str, &str)]) -> AppResult<ConsoleConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ConsoleConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_target_local_backend() {
        let config = config(&[]).unwrap_or_else(|_| unreachable!());
        assert_eq!(config.api_base_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.http_timeout, Duration::from_secs(15));
        assert_eq!(config.toast_duration, Duration::from_secs(4));
        assert!(!config.offline);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config(&[
            ("CONSOLE_API_BASE_URL", "https://school.example/api"),
            ("CONSOLE_HTTP_TIMEOUT_MS", "500"),
            ("CONSOLE_TOAST_DURATION_MS", " 1000 "),
            ("CONSOLE_OFFLINE", "true"),
        ])
        .unwrap_or_else(|_| unreachable!());
        assert_eq!(config.api_base_url.as_str(), "https://school.example/api");
        assert_eq!(config.http_timeout, Duration::from_millis(500));
        assert_eq!(config.toast_duration, Duration::from_secs(1));
        assert!(config.offline);
    }

    #[test]
    fn invalid_values_fail_validation() {
        assert!(config(&[("CONSOLE_API_BASE_URL", "not a url")]).is_err());
        assert!(config(&[("CONSOLE_HTTP_TIMEOUT_MS", "-1")]).is_err());
        assert!(config(&[("CONSOLE_OFFLINE", "sometimes")]).is_err());
    }
}
