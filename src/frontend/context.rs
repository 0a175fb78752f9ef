use leptos::prelude::*;

use crate::common::StorageError;
use crate::i18n::Messages;
use crate::models::{Locale, Theme};
use crate::services::{ThemeStorage, ThemeStore};

const THEME_KEY: &str = "theme";

/// Theme persisted in the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserThemeStorage;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl ThemeStorage for BrowserThemeStorage {
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        let value = local_storage()?
            .get_item(THEME_KEY)
            .map_err(|_| StorageError::Unavailable)?;

        Ok(value.and_then(|v| v.parse().ok()))
    }

    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        local_storage()?
            .set_item(THEME_KEY, theme.as_str())
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

pub fn apply_body_class(theme: Theme) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        body.set_class_name(theme.body_class());
    }
}

/// Active theme shared through context. The store owns persistence; the
/// signal drives the view.
pub struct ThemeContext<S = BrowserThemeStorage>
where
    S: ThemeStorage + Send + Sync + 'static,
{
    store: StoredValue<ThemeStore<S>>,
    theme: RwSignal<Theme>,
}

impl<S> Clone for ThemeContext<S>
where
    S: ThemeStorage + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ThemeContext<S> where S: ThemeStorage + Send + Sync + 'static {}

impl ThemeContext {
    /// Restores the theme from `localStorage` and keeps the body class in
    /// step with it.
    pub fn init() -> Self {
        let ctx = Self::new(ThemeStore::apply(BrowserThemeStorage));
        apply_body_class(ctx.theme.get_untracked());

        let theme = ctx.theme;
        Effect::new(move |_| apply_body_class(theme.get()));

        ctx
    }
}

impl<S> ThemeContext<S>
where
    S: ThemeStorage + Send + Sync + 'static,
{
    pub fn new(store: ThemeStore<S>) -> Self {
        let theme = store.theme();

        Self {
            store: StoredValue::new(store),
            theme: RwSignal::new(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let mut next = self.theme.get_untracked();
        self.store.update_value(|store| {
            if let Err(e) = store.toggle() {
                log::warn!("Theme not persisted: {}", e);
            }
            next = store.theme();
        });

        self.theme.set(next);
    }
}

#[derive(Clone, Copy)]
pub struct LocaleContext(pub RwSignal<Locale>);

impl LocaleContext {
    pub fn locale(&self) -> Locale {
        self.0.get()
    }

    pub fn set(&self, locale: Locale) {
        self.0.set(locale);
    }

    /// Tracked read of the active message table.
    pub fn messages(&self) -> &'static Messages {
        self.0.get().messages()
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;
    use leptos::reactive::owner::Owner;

    use super::{LocaleContext, ThemeContext};
    use crate::models::{Locale, Theme};
    use crate::services::{MemoryThemeStorage, ThemeStore};

    #[test]
    fn test_theme_context_restores_and_toggles() {
        let owner = Owner::new();
        owner.set();

        let storage = MemoryThemeStorage::with_theme(Theme::Dark);
        let ctx = ThemeContext::new(ThemeStore::apply(storage.clone()));
        assert_eq!(ctx.theme(), Theme::Dark);

        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Light);
        assert_eq!(storage.stored(), Some(Theme::Light));

        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Dark);
        assert_eq!(storage.stored(), Some(Theme::Dark));
    }

    #[test]
    fn test_locale_context_switches_message_table() {
        let owner = Owner::new();
        owner.set();

        let ctx = LocaleContext(RwSignal::new(Locale::Es));
        assert_eq!(ctx.messages().username, "Usuario");

        ctx.set(Locale::En);
        assert_eq!(ctx.locale(), Locale::En);
        assert_eq!(ctx.messages().username, "User");
    }
}
