use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use dashboard_login::common::StorageError;
use dashboard_login::models::{Locale, Theme};
use dashboard_login::services::ThemeStorage;

use crate::web::state::AppState;

pub const THEME_COOKIE: &str = "dl_theme";
pub const LOCALE_COOKIE: &str = "dl_locale";

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

fn cookie_value<T: std::str::FromStr>(req: &HttpRequest, name: &str) -> Option<T> {
    req.cookie(name)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

pub fn preference_cookie(name: &'static str, value: &str) -> Cookie<'static> {
    Cookie::build(name, value.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::days(365))
        .finish()
}

/// Locale and theme a visitor picked, or the configured defaults.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Preferences {
    pub locale: Locale,
    pub theme: Theme,
}

impl Preferences {
    pub fn from_request(req: &HttpRequest, state: &AppState) -> Self {
        Self {
            locale: cookie_value(req, LOCALE_COOKIE).unwrap_or(state.default_locale),
            theme: cookie_value(req, THEME_COOKIE).unwrap_or(state.default_theme),
        }
    }
}

/// Theme persisted in the visitor's cookie. Saving only records the cookie;
/// the handler attaches it to the response.
pub struct CookieThemeStorage {
    current: Option<Theme>,
    pending: Option<Cookie<'static>>,
}

impl CookieThemeStorage {
    pub fn from_request(req: &HttpRequest) -> Self {
        Self {
            current: cookie_value(req, THEME_COOKIE),
            pending: None,
        }
    }

    pub fn into_cookie(self) -> Option<Cookie<'static>> {
        self.pending
    }
}

impl ThemeStorage for CookieThemeStorage {
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        Ok(self.current)
    }

    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.current = Some(theme);
        self.pending = Some(preference_cookie(THEME_COOKIE, theme.as_str()));
        Ok(())
    }
}

/// Renders `t` and attaches the preference cookie that changed, if any.
pub fn render_with_cookie<T: Template>(t: T, cookie: Option<Cookie<'static>>) -> HttpResponse {
    let mut resp = render(t);

    if let Some(cookie) = cookie {
        if let Err(e) = resp.add_cookie(&cookie) {
            log::error!("Failed to set cookie {}: {}", cookie.name(), e);
        }
    }

    resp
}
