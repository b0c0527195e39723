use std::time::Duration;

use anyhow::{Context, Result, anyhow};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) api_url: String,
    pub(crate) log_level: String,
    pub(crate) http_timeout: Option<Duration>,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = non_empty(lookup("KBLOG_API_URL")).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let log_level = non_empty(lookup("KBLOG_LOG_LEVEL"))
            .or_else(|| non_empty(lookup("RUST_LOG")))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let http_timeout = match non_empty(lookup("KBLOG_HTTP_TIMEOUT_SECS")) {
            Some(raw) => Some(Duration::from_secs(parse_positive_secs(
                "KBLOG_HTTP_TIMEOUT_SECS",
                &raw,
            )?)),
            None => None,
        };

        Ok(Self {
            api_url,
            log_level,
            http_timeout,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_positive_secs(key: &str, raw: &str) -> Result<u64> {
    let value = raw
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let settings = settings(&[]).expect("defaults must be valid");
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.log_level, "warn");
        assert!(settings.http_timeout.is_none());
    }

    #[test]
    fn kblog_log_level_wins_over_rust_log() {
        let parsed = settings(&[("KBLOG_LOG_LEVEL", "debug"), ("RUST_LOG", "info")])
            .expect("must parse");
        assert_eq!(parsed.log_level, "debug");

        let settings = settings(&[("RUST_LOG", "info")]).expect("must parse");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn blank_api_url_falls_back_to_default() {
        let settings = settings(&[("KBLOG_API_URL", "   ")]).expect("must parse");
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn timeout_is_parsed_in_seconds() {
        let settings = settings(&[("KBLOG_HTTP_TIMEOUT_SECS", "15")]).expect("must parse");
        assert_eq!(settings.http_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn timeout_rejects_zero_and_garbage() {
        assert!(settings(&[("KBLOG_HTTP_TIMEOUT_SECS", "0")]).is_err());
        assert!(settings(&[("KBLOG_HTTP_TIMEOUT_SECS", "soon")]).is_err());
    }
}
