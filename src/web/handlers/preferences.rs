use actix_web::{HttpRequest, HttpResponse, post, web};

use dashboard_login::models::Locale;
use dashboard_login::services::ThemeStore;

use crate::web::forms::ScreenState;
use crate::web::helpers::{
    CookieThemeStorage, LOCALE_COOKIE, Preferences, preference_cookie, render_with_cookie,
};
use crate::web::state::AppState;
use crate::web::templates::LoginTemplate;

fn screen_page(prefs: &Preferences, screen: Option<web::Form<ScreenState>>) -> LoginTemplate {
    let screen = screen.map(web::Form::into_inner).unwrap_or_default();

    LoginTemplate::new(prefs)
        .with_form(&screen.login_form())
        .with_recovery(&screen.recovery_form())
}

/// Flips the theme and re-renders whatever the visitor had on screen.
#[post("/theme/toggle")]
pub async fn toggle_theme(
    state: web::Data<AppState>,
    req: HttpRequest,
    screen: Option<web::Form<ScreenState>>,
) -> HttpResponse {
    let mut store = ThemeStore::apply_or(CookieThemeStorage::from_request(&req), state.default_theme);

    if let Err(e) = store.toggle() {
        log::error!("Failed to persist theme: {}", e);
    }

    let prefs = Preferences {
        theme: store.theme(),
        ..Preferences::from_request(&req, &state)
    };

    render_with_cookie(
        screen_page(&prefs, screen),
        store.into_storage().into_cookie(),
    )
}

#[post("/locale/{code}")]
pub async fn set_locale(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    screen: Option<web::Form<ScreenState>>,
) -> HttpResponse {
    let locale = match path.parse::<Locale>() {
        Ok(locale) => locale,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };

    let prefs = Preferences {
        locale,
        ..Preferences::from_request(&req, &state)
    };

    render_with_cookie(
        screen_page(&prefs, screen),
        Some(preference_cookie(LOCALE_COOKIE, locale.as_str())),
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(toggle_theme).service(set_locale);
}
