//! Static message tables for the login screen.

use serde::{Deserialize, Serialize};

use crate::models::{Locale, Theme};

mod en;
mod es;

pub use en::EN;
pub use es::ES;

/// Messages that can be stored in form state and rendered later in
/// whichever locale is active at that point.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    UsernameRequired,
    PasswordRequired,
    UserNotFound,
    WrongPassword,
    ValidationFailed,
    InvalidEmail,
    RecoverySuccess,
}

impl MessageKey {
    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsernameRequired => "username_required",
            Self::PasswordRequired => "password_required",
            Self::UserNotFound => "user_not_found",
            Self::WrongPassword => "wrong_password",
            Self::ValidationFailed => "validation_failed",
            Self::InvalidEmail => "invalid_email",
            Self::RecoverySuccess => "recovery_success",
        }
    }
}

/// Every label of the login screen for one locale.
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub login: &'static str,
    pub username_required: &'static str,
    pub password_required: &'static str,
    pub user_not_found: &'static str,
    pub wrong_password: &'static str,
    pub validation_failed: &'static str,
    pub forgot_password: &'static str,
    pub recovery_title: &'static str,
    pub recovery_placeholder: &'static str,
    pub recovery_submit: &'static str,
    pub recovery_close: &'static str,
    pub invalid_email: &'static str,
    pub recovery_success: &'static str,
    pub language_es: &'static str,
    pub language_en: &'static str,
    pub dark_mode: &'static str,
    pub light_mode: &'static str,
}

impl Messages {
    pub fn get(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::UsernameRequired => self.username_required,
            MessageKey::PasswordRequired => self.password_required,
            MessageKey::UserNotFound => self.user_not_found,
            MessageKey::WrongPassword => self.wrong_password,
            MessageKey::ValidationFailed => self.validation_failed,
            MessageKey::InvalidEmail => self.invalid_email,
            MessageKey::RecoverySuccess => self.recovery_success,
        }
    }

    /// Name of `locale` written in this table's language.
    pub fn language_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Es => self.language_es,
            Locale::En => self.language_en,
        }
    }

    /// Label of the control that switches away from `current`.
    pub fn theme_toggle_label(&self, current: Theme) -> &'static str {
        if current.is_dark() {
            self.light_mode
        } else {
            self.dark_mode
        }
    }
}

pub fn messages(locale: Locale) -> &'static Messages {
    match locale {
        Locale::Es => &ES,
        Locale::En => &EN,
    }
}

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        messages(*self)
    }
}
