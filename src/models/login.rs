use serde::{Deserialize, Serialize};
use url::Url;

use crate::common::AuthError;
use crate::i18n::MessageKey;
use crate::services::AuthProvider;

/// State behind the login view.
///
/// Errors are kept as message keys, so switching the locale re-renders them
/// in the new language without resubmitting.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub username_error: Option<MessageKey>,
    pub password_error: Option<MessageKey>,
    pub general_error: Option<MessageKey>,
    /// "Validation failed" banner shown next to any authentication error.
    pub banner: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LoginOutcome {
    /// A required field was empty; the credentials were never checked.
    Incomplete,
    Rejected(AuthError),
    /// Open this URL in a new browsing context.
    Redirect(Url),
}

impl LoginForm {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn has_errors(&self) -> bool {
        self.username_error.is_some()
            || self.password_error.is_some()
            || self.general_error.is_some()
            || self.banner
    }

    pub fn clear_errors(&mut self) {
        self.username_error = None;
        self.password_error = None;
        self.general_error = None;
        self.banner = false;
    }

    /// Flags empty fields. Returns `true` when both are filled in.
    pub fn validate(&mut self) -> bool {
        if self.username.is_empty() {
            self.username_error = Some(MessageKey::UsernameRequired);
        }
        if self.password.is_empty() {
            self.password_error = Some(MessageKey::PasswordRequired);
        }

        self.username_error.is_none() && self.password_error.is_none()
    }

    pub fn submit(
        &mut self,
        auth: &dyn AuthProvider,
        redirect: &Url,
    ) -> LoginOutcome {
        self.clear_errors();

        if !self.validate() {
            log::debug!("login form submitted with missing fields");
            return LoginOutcome::Incomplete;
        }

        match auth.authenticate(&self.username, &self.password) {
            Ok(()) => {
                log::info!("user {:?} logged in", self.username);
                LoginOutcome::Redirect(redirect.clone())
            }
            Err(e) => {
                log::info!("login rejected for {:?}: {}", self.username, e);
                self.general_error = Some(e.message_key());
                self.banner = true;
                LoginOutcome::Rejected(e)
            }
        }
    }
}
