use leptos::prelude::*;

use crate::frontend::context::{LocaleContext, ThemeContext};
use crate::models::Locale;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let locale = expect_context::<LocaleContext>();

    let label = move || locale.messages().theme_toggle_label(theme.theme());

    view! {
        <button
            type="button"
            class="theme-toggle-btn"
            title=label
            aria-label=label
            on:click=move |_| theme.toggle()
        >
            {move || if theme.theme().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

/// One flag button per locale, titled with the language name as it reads in
/// the active locale.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let locale = expect_context::<LocaleContext>();

    let buttons = Locale::ALL
        .into_iter()
        .map(|target| {
            view! {
                <button
                    type="button"
                    class=move || if locale.locale() == target { "lang-btn active" } else { "lang-btn" }
                    title=move || locale.messages().language_name(target)
                    on:click=move |_| locale.set(target)
                >
                    {target.as_str().to_uppercase()}
                </button>
            }
        })
        .collect_view();

    view! { <div class="lang-toggle">{buttons}</div> }
}
