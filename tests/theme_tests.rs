mod common;

#[cfg(test)]
pub mod theme_tests {
    use super::common::*;

    use dashboard_login::models::Theme;
    use dashboard_login::services::{MemoryThemeStorage, ThemeStore};

    #[test]
    fn test_apply_defaults_to_light() {
        let store = ThemeStore::apply(RecordingStorage::default());

        assert_eq!(store.theme(), Theme::Light);
        assert!(store.storage().saved.is_empty());
    }

    #[test]
    fn test_apply_restores_persisted_theme() {
        let store = ThemeStore::apply(RecordingStorage {
            initial: Some(Theme::Dark),
            ..Default::default()
        });

        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_apply_falls_back_when_storage_unreadable() {
        let store = ThemeStore::apply_or(
            RecordingStorage {
                initial: Some(Theme::Light),
                fail_reads: true,
                ..Default::default()
            },
            Theme::Dark,
        );

        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_flips_and_persists_once_per_call() {
        let mut store = ThemeStore::apply(RecordingStorage::default());

        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.storage().saved, vec![Theme::Dark]);

        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(store.storage().saved, vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_toggle_flips_even_when_write_fails() {
        let mut store = ThemeStore::apply(RecordingStorage {
            fail_writes: true,
            ..Default::default()
        });

        assert!(store.toggle().is_err());
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_memory_storage_survives_new_store() {
        let storage = MemoryThemeStorage::new();

        let mut store = ThemeStore::apply(storage.clone());
        store.toggle().unwrap();
        drop(store);

        assert_eq!(storage.stored(), Some(Theme::Dark));
        assert_eq!(ThemeStore::apply(storage).theme(), Theme::Dark);
    }

    #[test]
    fn test_theme_strings_and_classes() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" LIGHT ".parse::<Theme>(), Ok(Theme::Light));
        assert!("blue".parse::<Theme>().is_err());

        assert_eq!(Theme::Light.body_class(), "light-mode");
        assert_eq!(Theme::Dark.body_class(), "dark-mode");
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
