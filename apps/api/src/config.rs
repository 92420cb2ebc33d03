use std::str::FromStr;

use anyhow::{Context, Result};

use crate::errors::AppError;

pub const DEFAULT_COMPLETION_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "llama-3.3-70b-versatile";

/// What to do when the remote completion call fails after being attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fall back to the local template path and attach a notice.
    #[default]
    Fallback,
    /// Surface the failure to the caller.
    Propagate,
}

impl FromStr for FailurePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(FailurePolicy::Fallback),
            "propagate" => Ok(FailurePolicy::Propagate),
            other => Err(AppError::Validation(format!(
                "unknown completion failure policy '{other}' (expected 'fallback' or 'propagate')"
            ))),
        }
    }
}

/// Settings for the remote completion path.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    pub failure_policy: FailurePolicy,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_COMPLETION_API_URL.to_string(),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            timeout_secs: 60,
            failure_policy: FailurePolicy::Fallback,
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, proposals and settings live in process memory.
    pub redis_url: Option<String>,
    pub completion: CompletionConfig,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = CompletionConfig::default();

        Ok(Config {
            redis_url: lookup("REDIS_URL").filter(|v| !v.trim().is_empty()),
            completion: CompletionConfig {
                api_url: lookup("COMPLETION_API_URL").unwrap_or(defaults.api_url),
                model: lookup("COMPLETION_MODEL").unwrap_or(defaults.model),
                temperature: parse_or(&lookup, "COMPLETION_TEMPERATURE", defaults.temperature)?,
                max_tokens: parse_or(&lookup, "COMPLETION_MAX_TOKENS", defaults.max_tokens)?,
                timeout_secs: parse_or(&lookup, "COMPLETION_TIMEOUT_SECS", defaults.timeout_secs)?,
                failure_policy: parse_or(
                    &lookup,
                    "COMPLETION_FAILURE_POLICY",
                    defaults.failure_policy,
                )?,
            },
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.redis_url.is_none());
        assert_eq!(config.completion, CompletionConfig::default());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("REDIS_URL", "redis://localhost:6379"),
            ("COMPLETION_TEMPERATURE", "0.2"),
            ("COMPLETION_MAX_TOKENS", "512"),
            ("COMPLETION_FAILURE_POLICY", "Propagate"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.redis_url.as_deref(), Some("redis://localhost:6379"));
        assert!((config.completion.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.completion.max_tokens, 512);
        assert_eq!(config.completion.failure_policy, FailurePolicy::Propagate);
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_unknown_failure_policy_fails() {
        assert!(Config::from_lookup(lookup_from(&[("COMPLETION_FAILURE_POLICY", "retry")])).is_err());
    }

    #[test]
    fn test_blank_redis_url_means_memory_store() {
        let config = Config::from_lookup(lookup_from(&[("REDIS_URL", "  ")])).unwrap();
        assert!(config.redis_url.is_none());
    }
}
