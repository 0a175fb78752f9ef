use askama::Template;
use url::Url;

use dashboard_login::i18n::{MessageKey, Messages};
use dashboard_login::models::{Locale, LoginForm, RecoveryForm, Theme};

use crate::web::helpers::Preferences;

pub struct LanguageLink {
    pub code: &'static str,
    pub title: &'static str,
    pub active: bool,
}

/// Hidden input that carries on-screen state through a preference toggle.
pub struct HiddenField {
    pub name: &'static str,
    pub value: String,
}

impl HiddenField {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

pub struct RecoveryView {
    pub email: String,
    pub error: Option<&'static str>,
    pub success: Option<&'static str>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub t: &'static Messages,
    pub locale: Locale,
    pub theme: Theme,
    pub theme_label: &'static str,
    pub languages: Vec<LanguageLink>,
    pub username: String,
    pub username_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub general_error: Option<&'static str>,
    pub banner: Option<&'static str>,
    pub redirect: Option<String>,
    pub recovery: Option<RecoveryView>,
    pub hidden: Vec<HiddenField>,
}

impl LoginTemplate {
    pub fn new(prefs: &Preferences) -> Self {
        let t = prefs.locale.messages();
        let languages = Locale::ALL
            .into_iter()
            .map(|locale| LanguageLink {
                code: locale.as_str(),
                title: t.language_name(locale),
                active: locale == prefs.locale,
            })
            .collect();

        Self {
            t,
            locale: prefs.locale,
            theme: prefs.theme,
            theme_label: t.theme_toggle_label(prefs.theme),
            languages,
            username: String::new(),
            username_error: None,
            password_error: None,
            general_error: None,
            banner: None,
            redirect: None,
            recovery: None,
            hidden: Vec::new(),
        }
    }

    /// The password is never echoed back into the page.
    pub fn with_form(mut self, form: &LoginForm) -> Self {
        let t = self.t;
        self.username = form.username.clone();
        self.username_error = form.username_error.map(|k| t.get(k));
        self.password_error = form.password_error.map(|k| t.get(k));
        self.general_error = form.general_error.map(|k| t.get(k));
        self.banner = form.banner.then(|| t.get(MessageKey::ValidationFailed));

        let errors = [
            ("username_error", form.username_error),
            ("password_error", form.password_error),
            ("general_error", form.general_error),
        ];
        for (name, key) in errors {
            if let Some(key) = key {
                self.hidden.push(HiddenField::new(name, key.as_str()));
            }
        }
        if form.banner {
            self.hidden.push(HiddenField::new("banner", "true"));
        }
        self
    }

    pub fn with_recovery(mut self, form: &RecoveryForm) -> Self {
        if form.open {
            let t = self.t;
            self.recovery = Some(RecoveryView {
                email: form.email.clone(),
                error: form.error.map(|k| t.get(k)),
                success: form.success.then(|| t.get(MessageKey::RecoverySuccess)),
            });

            self.hidden.push(HiddenField::new("recovery", "true"));
            self.hidden.push(HiddenField::new("recovery_email", form.email.as_str()));
            if let Some(key) = form.error {
                self.hidden.push(HiddenField::new("recovery_error", key.as_str()));
            }
            if form.success {
                self.hidden.push(HiddenField::new("recovery_success", "true"));
            }
        }
        self
    }

    pub fn with_redirect(mut self, url: &Url) -> Self {
        self.redirect = Some(url.to_string());
        self
    }
}
