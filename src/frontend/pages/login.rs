//! Login page

use std::sync::Arc;

use leptos::prelude::*;
use url::Url;

use crate::frontend::components::{
    Button, ErrorAlert, LanguageToggle, PasswordInput, RecoveryModal, TextInput, ThemeToggle,
};
use crate::frontend::context::LocaleContext;
use crate::i18n::MessageKey;
use crate::models::{LoginForm, LoginOutcome, RecoveryForm};
use crate::services::AuthProvider;

fn open_in_new_tab(url: &Url) {
    let opened = web_sys::window()
        .map(|w| w.open_with_url_and_target(url.as_str(), "_blank"));

    if !matches!(opened, Some(Ok(_))) {
        log::error!("Could not open {}", url);
    }
}

/// Runs one submit against the form signal and returns the URL to open, if
/// the credentials were accepted.
fn submit_login(form: RwSignal<LoginForm>, auth: &dyn AuthProvider, redirect: &Url) -> Option<Url> {
    match form.try_update(|f| f.submit(auth, redirect)) {
        Some(LoginOutcome::Redirect(url)) => Some(url),
        _ => None,
    }
}

#[component]
pub fn LoginPage(auth: Arc<dyn AuthProvider>, redirect: Url) -> impl IntoView {
    let locale = expect_context::<LocaleContext>();
    let t = move || locale.messages();

    let form = RwSignal::new(LoginForm::default());
    let recovery = RwSignal::new(RecoveryForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(url) = submit_login(form, auth.as_ref(), &redirect) {
            open_in_new_tab(&url);
        }
    };

    let username_error = Signal::derive(move || form.with(|f| f.username_error).map(|k| t().get(k)));
    let password_error = Signal::derive(move || form.with(|f| f.password_error).map(|k| t().get(k)));

    view! {
        <div class="login-page">
            <div class="login-toolbar">
                <LanguageToggle />
                <ThemeToggle />
            </div>
            <div class="login-card">
                <h1>{move || t().title}</h1>
                <form class="login-form" novalidate=true on:submit=on_submit>
                    <TextInput
                        name="username"
                        input_type="text"
                        placeholder=Signal::derive(move || t().username)
                        value=Signal::derive(move || form.with(|f| f.username.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.set_username(v)))
                        error=username_error
                    />
                    <PasswordInput
                        placeholder=Signal::derive(move || t().password)
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.set_password(v)))
                        error=password_error
                    />
                    {move || form.with(|f| f.general_error).map(|key| {
                        view! { <p class="general-error">{move || t().get(key)}</p> }
                    })}
                    <Show when=move || form.with(|f| f.banner)>
                        <ErrorAlert message=Signal::derive(move || t().get(MessageKey::ValidationFailed)) />
                    </Show>
                    <Button>{move || t().login}</Button>
                </form>
                <a
                    href="#"
                    class="forgot-link"
                    on:click=move |ev| {
                        ev.prevent_default();
                        recovery.update(|r| r.open());
                    }
                >
                    {move || t().forgot_password}
                </a>
            </div>
            <RecoveryModal form=recovery />
        </div>
    }
}
