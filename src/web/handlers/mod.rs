pub mod login;
pub mod preferences;
pub mod recovery;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    login::configure(cfg);
    preferences::configure(cfg);
    recovery::configure(cfg);
}

#[cfg(test)]
pub(crate) fn test_state() -> crate::web::state::AppState {
    crate::web::state::AppState::from_config(&dashboard_login::config::Config::default())
}
