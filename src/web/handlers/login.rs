use actix_web::{HttpRequest, Responder, get, post, web};

use dashboard_login::models::{LoginForm, LoginOutcome, RecoveryForm};

use crate::web::forms::{self, PageQuery};
use crate::web::helpers::{Preferences, render};
use crate::web::state::AppState;
use crate::web::templates::LoginTemplate;

#[get("/")]
pub async fn login_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let prefs = Preferences::from_request(&req, &state);
    let mut page = LoginTemplate::new(&prefs);

    if query.recovery_open() {
        let mut recovery = RecoveryForm::default();
        recovery.open();
        page = page.with_recovery(&recovery);
    }

    render(page)
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<forms::LoginForm>,
) -> impl Responder {
    let prefs = Preferences::from_request(&req, &state);
    let forms::LoginForm { username, password } = form.into_inner();

    let mut login = LoginForm::new(username, password);
    let outcome = login.submit(state.auth.as_ref(), &state.redirect_url);

    let mut page = LoginTemplate::new(&prefs).with_form(&login);
    if let LoginOutcome::Redirect(url) = outcome {
        page = page.with_redirect(&url);
    }

    render(page)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_page).service(login_submit);
}
