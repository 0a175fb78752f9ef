mod common;

#[cfg(test)]
pub mod i18n_tests {
    use dashboard_login::i18n::{EN, ES, MessageKey, messages};
    use dashboard_login::models::{Locale, LoginForm, Theme};
    use dashboard_login::services::MockAuthProvider;

    use super::common::redirect_url;

    const ALL_KEYS: [MessageKey; 7] = [
        MessageKey::UsernameRequired,
        MessageKey::PasswordRequired,
        MessageKey::UserNotFound,
        MessageKey::WrongPassword,
        MessageKey::ValidationFailed,
        MessageKey::InvalidEmail,
        MessageKey::RecoverySuccess,
    ];

    #[test]
    fn test_spanish_labels() {
        let t = messages(Locale::Es);

        assert_eq!(t.username, "Usuario");
        assert_eq!(t.password, "Contraseña");
        assert_eq!(t.login, "Acceder");
        assert_eq!(t.forgot_password, "¿Has olvidado tu contraseña?");
        assert_eq!(t.recovery_title, "Restablecimiento de contraseña");
        assert_eq!(t.recovery_placeholder, "Introduce el Email asociado a tu cuenta");
        assert_eq!(t.recovery_submit, "Enviar");
        assert_eq!(t.get(MessageKey::InvalidEmail), "Error: Introduce un correo válido");
        assert_eq!(t.get(MessageKey::RecoverySuccess), "Formulario enviado con éxito");
        assert_eq!(
            t.get(MessageKey::ValidationFailed),
            "Se ha producido un error en la validación de los datos introducidos"
        );
    }

    #[test]
    fn test_language_names_follow_active_locale() {
        assert_eq!(ES.language_name(Locale::En), "Inglés");
        assert_eq!(EN.language_name(Locale::En), "English");
        assert_eq!(EN.language_name(Locale::Es), "Spanish");
    }

    #[test]
    fn test_every_key_translated_differently() {
        for key in ALL_KEYS {
            assert!(!ES.get(key).is_empty(), "{key:?} missing in es");
            assert!(!EN.get(key).is_empty(), "{key:?} missing in en");
            assert_ne!(ES.get(key), EN.get(key), "{key:?} not translated");
        }
    }

    #[test]
    fn test_switching_locale_rerenders_stored_errors() {
        let mut form = LoginForm::default();
        form.submit(&MockAuthProvider::default(), &redirect_url());
        let key = form.username_error.unwrap();

        assert_eq!(Locale::Es.messages().get(key), "El usuario es obligatorio");
        assert_eq!(Locale::En.messages().get(key), "Username is required");
    }

    #[test]
    fn test_switching_locale_changes_placeholders() {
        assert_eq!(Locale::Es.messages().username, "Usuario");
        assert_eq!(Locale::En.messages().username, "User");
        assert_eq!(Locale::En.messages().password, "Password");
    }

    #[test]
    fn test_theme_toggle_label_names_target_theme() {
        assert_eq!(ES.theme_toggle_label(Theme::Light), "Modo oscuro");
        assert_eq!(ES.theme_toggle_label(Theme::Dark), "Modo claro");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("ES".parse::<Locale>(), Ok(Locale::Es));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Es);
    }
}
