//! Engine configuration loaded from the environment.

use anyhow::{bail, Context, Result};

pub const CACHE_REQUIREMENTS_VAR: &str = "CHARGEN_CACHE_REQUIREMENTS";
pub const DETECT_DUPLICATES_VAR: &str = "CHARGEN_DETECT_DUPLICATES";
pub const LOG_FILTER_VAR: &str = "CHARGEN_LOG_FILTER";

pub const DEFAULT_LOG_FILTER: &str = "chargen_engine=info,chargen_domain=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Memoise class requirement lookups per `(class, level, subclass)`.
    pub cache_requirements: bool,
    /// Run the cross-source duplicate scan in whole-character validation.
    pub detect_duplicates: bool,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_requirements: true,
            detect_duplicates: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Reads the process environment after loading `.env.local` and `.env`.
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source. Unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let flag = |name: &str, default: bool| -> Result<bool> {
            match lookup(name) {
                Some(raw) => parse_flag(&raw).with_context(|| format!("invalid value for {name}")),
                None => Ok(default),
            }
        };

        Ok(Self {
            cache_requirements: flag(CACHE_REQUIREMENTS_VAR, defaults.cache_requirements)?,
            detect_duplicates: flag(DETECT_DUPLICATES_VAR, defaults.detect_duplicates)?,
            log_filter: lookup(LOG_FILTER_VAR)
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{other}'"),
    }
}

/// Loads `.env.local` then `.env` from the working directory, if present.
///
/// Earlier files win because dotenvy never overrides a variable already set.
pub fn load_dotenv() {
    for filename in [".env.local", ".env"] {
        let path = std::path::Path::new(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.cache_requirements);
        assert!(config.detect_duplicates);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_flags_parsed() {
        let config = EngineConfig::from_lookup(lookup(&[
            (CACHE_REQUIREMENTS_VAR, "false"),
            (DETECT_DUPLICATES_VAR, " OFF "),
            (LOG_FILTER_VAR, "chargen_domain=debug"),
        ]))
        .unwrap();
        assert!(!config.cache_requirements);
        assert!(!config.detect_duplicates);
        assert_eq!(config.log_filter, "chargen_domain=debug");
    }

    #[test]
    fn test_invalid_flag_names_variable() {
        let err = EngineConfig::from_lookup(lookup(&[(CACHE_REQUIREMENTS_VAR, "maybe")]))
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains(CACHE_REQUIREMENTS_VAR));
        assert!(message.contains("maybe"));
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = EngineConfig::from_lookup(lookup(&[(LOG_FILTER_VAR, "  ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
