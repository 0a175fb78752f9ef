use actix_web::{HttpRequest, Responder, post, web};

use dashboard_login::models::RecoveryForm;

use crate::web::forms;
use crate::web::helpers::{Preferences, render};
use crate::web::state::AppState;
use crate::web::templates::LoginTemplate;

/// No mail is sent; a well-formed address just gets the success message.
#[post("/recovery")]
pub async fn recovery_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<forms::RecoveryForm>,
) -> impl Responder {
    let prefs = Preferences::from_request(&req, &state);

    let mut recovery = RecoveryForm::default();
    recovery.open();
    recovery.set_email(form.into_inner().email);

    if recovery.submit() {
        log::info!("Password reset requested for {:?}", recovery.email);
    }

    render(LoginTemplate::new(&prefs).with_recovery(&recovery))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(recovery_submit);
}
