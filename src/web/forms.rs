use serde::Deserialize;

use dashboard_login::i18n::MessageKey;
use dashboard_login::models;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct RecoveryForm {
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub recovery: Option<String>,
}

impl PageQuery {
    pub fn recovery_open(&self) -> bool {
        self.recovery.as_deref() == Some("open")
    }
}

/// What the visitor currently sees, posted along with the theme and
/// language toggles so the page comes back unchanged apart from the
/// preference. The password is never part of it.
#[derive(Debug, Default, Deserialize)]
pub struct ScreenState {
    #[serde(default)]
    pub username: String,
    pub username_error: Option<MessageKey>,
    pub password_error: Option<MessageKey>,
    pub general_error: Option<MessageKey>,
    #[serde(default)]
    pub banner: bool,
    #[serde(default)]
    pub recovery: bool,
    #[serde(default)]
    pub recovery_email: String,
    pub recovery_error: Option<MessageKey>,
    #[serde(default)]
    pub recovery_success: bool,
}

impl ScreenState {
    pub fn login_form(&self) -> models::LoginForm {
        models::LoginForm {
            username: self.username.clone(),
            password: String::new(),
            username_error: self.username_error,
            password_error: self.password_error,
            general_error: self.general_error,
            banner: self.banner,
        }
    }

    pub fn recovery_form(&self) -> models::RecoveryForm {
        models::RecoveryForm {
            open: self.recovery,
            email: self.recovery_email.clone(),
            error: self.recovery_error,
            success: self.recovery_success,
        }
    }
}
