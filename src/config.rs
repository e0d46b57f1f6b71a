// Runtime configuration. Everything comes from the environment; there is
// no config file.

use anyhow::{Context, Result};
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://pat.doggo.ninja/v1/";
pub const TOKEN_ENV: &str = "DOGGO_TOKEN";
pub const BASE_URL_ENV: &str = "GROWL_BASE_URL";

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Url,
    pub token: String,
}

impl Config {
    /// Build a config for an explicit base URL and token. A trailing `/`
    /// is added to the base URL so relative endpoints join below it.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .with_context(|| format!("Invalid base URL `{}`", base_url))?;
        Ok(Config {
            base_url,
            token: token.into(),
        })
    }

    /// Read `DOGGO_TOKEN` and the optional `GROWL_BASE_URL` override.
    ///
    /// A missing token is not an error here: requests go out without
    /// credentials and the server answers them as unauthorized.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let token = std::env::var(TOKEN_ENV).unwrap_or_default();
        if token.is_empty() {
            tracing::debug!("{} is not set; requests will be unauthenticated", TOKEN_ENV);
        }
        Config::new(&base_url, token)
    }
}
