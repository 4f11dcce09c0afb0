//! Configuration for the assistant
//!
//! Loads configuration from config.yml, with environment overrides

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::dialogue::{AssistantOptions, DEFAULT_RELATED_TOPICS};
use crate::error::{Error, Result};
use crate::retrieval::DEFAULT_LIMIT;

pub const CONFIG_FILE: &str = "config.yml";
pub const DEFAULT_LOG_FILTER: &str = "mcp_assistant=info";

/// YAML config structures
#[derive(Debug, Default, Deserialize)]
struct YamlConfig {
    assistant: Option<AssistantConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct AssistantConfig {
    #[serde(default, deserialize_with = "deserialize_string_or_scalar")]
    max_results: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_scalar")]
    related_topics: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_scalar")]
    expand_abbreviations: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingConfig {
    filter: Option<String>,
}

/// Deserialize a value that can be a string, number or bool
fn deserialize_string_or_scalar<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_yaml::Value> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_yaml::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string, number or bool, got {:?}",
            other
        ))),
    }
}

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_results: usize,
    pub related_topics: usize,
    pub expand_abbreviations: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration from config.yml or use defaults.
    /// Environment variables take precedence over config.yml values.
    pub fn new() -> Self {
        Self::load_dotenv();

        let loaded = match [CONFIG_FILE, "../config.yml"]
            .into_iter()
            .find(|path| Path::new(path).exists())
        {
            Some(path) => Self::load_from_file(path),
            None => Self::from_yaml(YamlConfig::default()),
        };

        loaded.unwrap_or_else(|err| {
            warn!("Falling back to default configuration: {}", err);
            Self::defaults()
        })
    }

    /// Load .env file into environment variables using dotenvy
    fn load_dotenv() {
        // Try to load from current directory first, then parent
        if dotenvy::dotenv().is_err() {
            let _ = dotenvy::from_filename("../.env");
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Self::from_yaml(YamlConfig::default());
        }
        let yaml: YamlConfig = serde_yaml::from_str(content)?;
        Self::from_yaml(yaml)
    }

    fn from_yaml(yaml: YamlConfig) -> Result<Self> {
        let assistant = yaml.assistant.unwrap_or_default();
        let logging = yaml.logging.unwrap_or_default();

        let max_results = Self::resolve_env_usize(
            assistant.max_results,
            "ASSISTANT_MAX_RESULTS",
            DEFAULT_LIMIT,
        )?;
        if max_results == 0 {
            return Err(Error::InvalidArgument(
                "max_results must be at least 1".to_string(),
            ));
        }

        let related_topics = Self::resolve_env_usize(
            assistant.related_topics,
            "ASSISTANT_RELATED_TOPICS",
            DEFAULT_RELATED_TOPICS,
        )?;

        let expand_abbreviations = Self::resolve_env_bool(
            assistant.expand_abbreviations,
            "ASSISTANT_EXPAND_ABBREVIATIONS",
        )?;

        let log_filter = Self::resolve_env_string(logging.filter, "ASSISTANT_LOG")
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            max_results,
            related_topics,
            expand_abbreviations,
            log_filter,
        })
    }

    /// Resolve a value: explicit env var wins, then `${VAR}` placeholders, then the literal
    fn resolve_env_string(value: Option<String>, env_key: &str) -> Option<String> {
        if let Ok(env_val) = std::env::var(env_key) {
            return Some(env_val);
        }
        match value {
            Some(v) if v.starts_with("${") && v.ends_with('}') => {
                // Extract var name from ${VAR_NAME}
                let var_name = &v[2..v.len() - 1];
                std::env::var(var_name).ok()
            }
            other => other,
        }
    }

    fn resolve_env_usize(value: Option<String>, env_key: &str, default: usize) -> Result<usize> {
        match Self::resolve_env_string(value, env_key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                Error::Config(format!(
                    "{} must be a non-negative integer, got {:?}: {}",
                    env_key, raw, e
                ))
            }),
        }
    }

    fn resolve_env_bool(value: Option<String>, env_key: &str) -> Result<bool> {
        match Self::resolve_env_string(value, env_key) {
            None => Ok(false),
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" | "" => Ok(false),
                _ => Err(Error::Config(format!(
                    "{} must be a boolean, got {:?}",
                    env_key, raw
                ))),
            },
        }
    }

    /// Create config with built-in defaults
    fn defaults() -> Self {
        Self {
            max_results: DEFAULT_LIMIT,
            related_topics: DEFAULT_RELATED_TOPICS,
            expand_abbreviations: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Reply-generation options derived from this config
    pub fn options(&self) -> AssistantOptions {
        AssistantOptions {
            max_results: self.max_results,
            related_topics: self.related_topics,
            expand_abbreviations: self.expand_abbreviations,
        }
    }
}
