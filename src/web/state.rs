use std::sync::Arc;

use url::Url;

use dashboard_login::config::Config;
use dashboard_login::models::{Locale, Theme};
use dashboard_login::services::{AuthProvider, MockAuthProvider};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthProvider>,
    pub redirect_url: Url,
    pub default_locale: Locale,
    pub default_theme: Theme,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            auth: Arc::new(MockAuthProvider::new(config.credentials.clone())),
            redirect_url: config.redirect_url.clone(),
            default_locale: config.default_locale,
            default_theme: config.default_theme,
        }
    }
}
