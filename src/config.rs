use std::env;

use anyhow::{Context, Result};
use tracing::warn;

use crate::google_translate::DEFAULT_ENDPOINT;
use crate::slack_verification::SigningSecret;

const SIGNING_SECRET_KEY: &str = "SLACK_SIGNING_SECRET";
const API_KEY_KEY: &str = "GOOGLE_TRANSLATE_API_KEY";
const ENDPOINT_KEY: &str = "GOOGLE_TRANSLATE_ENDPOINT";

/// Settings read from the environment once, when the function starts.
#[derive(Clone)]
pub struct Config {
    pub signing_secret: SigningSecret,
    pub translate_api_key: String,
    pub translate_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let signing_secret = lookup(SIGNING_SECRET_KEY)
            .map(SigningSecret::new)
            .unwrap_or_default();
        if signing_secret.is_empty() {
            // every request will be rejected
            warn!("{} is not set", SIGNING_SECRET_KEY);
        }
        let translate_api_key = lookup(API_KEY_KEY)
            .filter(|key| !key.is_empty())
            .with_context(|| format!("{} is not set", API_KEY_KEY))?;
        let translate_endpoint = lookup(ENDPOINT_KEY)
            .filter(|endpoint| !endpoint.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Ok(Self {
            signing_secret,
            translate_api_key,
            translate_endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_settings() {
        let config = Config::from_lookup(lookup(&[
            ("SLACK_SIGNING_SECRET", "shh"),
            ("GOOGLE_TRANSLATE_API_KEY", "api-key"),
            ("GOOGLE_TRANSLATE_ENDPOINT", "http://localhost:9000/translate"),
        ])).unwrap();
        assert!(!config.signing_secret.is_empty());
        assert_eq!(config.translate_api_key, "api-key");
        assert_eq!(config.translate_endpoint, "http://localhost:9000/translate");
    }

    #[test]
    fn missing_secret_fails_closed() {
        let config = Config::from_lookup(lookup(&[
            ("GOOGLE_TRANSLATE_API_KEY", "api-key"),
        ])).unwrap();
        assert!(config.signing_secret.is_empty());
        assert_eq!(config.translate_endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let Err(error) = Config::from_lookup(lookup(&[
            ("SLACK_SIGNING_SECRET", "shh"),
        ])) else {
            panic!("expected a missing key error");
        };
        assert!(error.to_string().contains("GOOGLE_TRANSLATE_API_KEY"));
    }
}
