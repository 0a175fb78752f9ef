pub mod components;
pub mod context;
pub mod pages;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::default_redirect_url;
use crate::models::Locale;
use crate::services::{AuthProvider, MockAuthProvider};
use context::{LocaleContext, ThemeContext};
use pages::LoginPage;

/// Root component for the browser build. The theme is restored from
/// `localStorage` before the first render.
#[component]
pub fn App() -> impl IntoView {
    provide_context(ThemeContext::init());
    provide_context(LocaleContext(RwSignal::new(Locale::default())));

    let auth: Arc<dyn AuthProvider> = Arc::new(MockAuthProvider::default());

    view! { <LoginPage auth=auth redirect=default_redirect_url() /> }
}
