//! Runtime configuration read from the environment.
//!
//! `.env` files are loaded by the binary before [`Config::from_env`] runs.

use std::net::SocketAddr;

use url::Url;

use crate::common::ConfigError;
use crate::models::{Locale, Theme};
use crate::services::Credentials;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";
pub const DEFAULT_REDIRECT_URL: &str = "https://kvothe73.github.io/dashboard-startup";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub static_dir: String,
    pub redirect_url: Url,
    pub credentials: Credentials,
    pub default_locale: Locale,
    pub default_theme: Theme,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset,
    /// except for the credentials, which must not be blank once set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind.clone()))?;

        let redirect = get("LOGIN_REDIRECT_URL")
            .unwrap_or_else(|| DEFAULT_REDIRECT_URL.to_string());
        let redirect_url = parse_redirect(&redirect)?;

        let credentials = credentials(&lookup)?;

        let default_locale = match get("DEFAULT_LOCALE") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DEFAULT_LOCALE",
                value,
            })?,
            None => Locale::default(),
        };

        let default_theme = match get("DEFAULT_THEME") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DEFAULT_THEME",
                value,
            })?,
            None => Theme::default(),
        };

        Ok(Self {
            bind_addr,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            redirect_url,
            credentials,
            default_locale,
            default_theme,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080))),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            redirect_url: default_redirect_url(),
            credentials: Credentials::default(),
            default_locale: Locale::default(),
            default_theme: Theme::default(),
        }
    }
}

pub fn default_redirect_url() -> Url {
    Url::parse(DEFAULT_REDIRECT_URL).expect("Invalid default redirect URL")
}

/// Unset credentials fall back to the built-in pair. The password is taken
/// verbatim, surrounding spaces included.
fn credentials<F>(lookup: &F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Credentials::default();

    let username = match lookup("LOGIN_USERNAME") {
        Some(value) if value.trim().is_empty() => {
            return Err(ConfigError::EmptyCredential("LOGIN_USERNAME"));
        }
        Some(value) => value.trim().to_string(),
        None => defaults.username,
    };

    let password = match lookup("LOGIN_PASSWORD") {
        Some(value) if value.is_empty() => {
            return Err(ConfigError::EmptyCredential("LOGIN_PASSWORD"));
        }
        Some(value) => value,
        None => defaults.password,
    };

    Ok(Credentials::new(username, password))
}

fn parse_redirect(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidRedirectUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidRedirectUrl {
            value: value.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}
