//! Configuration from the environment.

use anyhow::Result;
use smbios_catalog::DEFAULT_PRODUCT;
use smbios_serial::DEFAULT_MLB_ATTEMPTS;

use crate::error::CliError;

const LOG_ENV: &str = "SMBIOS_KEYGEN_LOG";
const MLB_ATTEMPTS_ENV: &str = "SMBIOS_KEYGEN_MLB_ATTEMPTS";
const DEFAULT_MODEL_ENV: &str = "SMBIOS_KEYGEN_DEFAULT_MODEL";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directives, e.g. `warn` or `smbios_serial=debug`.
    pub log_filter: String,

    /// Board serial candidates drawn before giving up.
    pub mlb_attempts: u32,

    /// Model used when neither `--model` nor `--platform` is given.
    pub default_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            mlb_attempts: DEFAULT_MLB_ATTEMPTS,
            default_model: DEFAULT_PRODUCT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_filter = lookup(LOG_ENV).unwrap_or(defaults.log_filter);

        let mlb_attempts = match lookup(MLB_ATTEMPTS_ENV) {
            Some(value) => value
                .trim()
                .parse()
                .ok()
                .filter(|&attempts| attempts > 0)
                .ok_or(CliError::InvalidEnv {
                    name: MLB_ATTEMPTS_ENV,
                    value,
                })?,
            None => defaults.mlb_attempts,
        };

        let default_model = lookup(DEFAULT_MODEL_ENV)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.default_model);

        Ok(Self {
            log_filter,
            mlb_attempts,
            default_model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_env() {
        assert_eq!(config(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            (LOG_ENV, "debug"),
            (MLB_ATTEMPTS_ENV, "50"),
            (DEFAULT_MODEL_ENV, "MacPro6,1"),
        ])
        .unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.mlb_attempts, 50);
        assert_eq!(config.default_model, "MacPro6,1");
    }

    #[test]
    fn rejects_bad_attempts() {
        assert!(config(&[(MLB_ATTEMPTS_ENV, "lots")]).is_err());
        assert!(config(&[(MLB_ATTEMPTS_ENV, "0")]).is_err());
    }
}
