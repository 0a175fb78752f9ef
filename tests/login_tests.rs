mod common;

#[cfg(test)]
pub mod login_tests {
    use super::common::*;

    use dashboard_login::common::AuthError;
    use dashboard_login::i18n::{MessageKey, ES};
    use dashboard_login::models::*;
    use dashboard_login::services::*;

    #[test]
    fn test_submit_empty_fields_flags_both_and_skips_auth() {
        let auth = CountingAuth::default();
        let mut form = LoginForm::default();

        let outcome = form.submit(&auth, &redirect_url());

        assert_eq!(outcome, LoginOutcome::Incomplete);
        assert_eq!(form.username_error, Some(MessageKey::UsernameRequired));
        assert_eq!(form.password_error, Some(MessageKey::PasswordRequired));
        assert_eq!(form.general_error, None);
        assert!(!form.banner);
        assert_eq!(auth.calls(), 0);
    }

    #[test]
    fn test_submit_missing_password_only_flags_password() {
        let auth = CountingAuth::default();
        let mut form = LoginForm::new("dashboard", "");

        assert_eq!(form.submit(&auth, &redirect_url()), LoginOutcome::Incomplete);
        assert_eq!(form.username_error, None);
        assert_eq!(form.password_error, Some(MessageKey::PasswordRequired));
        assert_eq!(auth.calls(), 0);
    }

    #[test]
    fn test_submit_valid_credentials_redirects_once() {
        let auth = CountingAuth::default();
        let mut form = LoginForm::new("dashboard", "1234");

        let outcome = form.submit(&auth, &redirect_url());

        match outcome {
            LoginOutcome::Redirect(url) => assert_eq!(url.as_str(), REDIRECT_URL),
            other => panic!("expected redirect, got {other:?}"),
        }
        assert!(!form.has_errors());
        assert_eq!(auth.calls(), 1);
    }

    #[test]
    fn test_submit_unknown_user_sets_error_and_banner() {
        let mut form = LoginForm::new("inexistente", "1234");

        let outcome = form.submit(&MockAuthProvider::default(), &redirect_url());

        assert_eq!(outcome, LoginOutcome::Rejected(AuthError::UserNotFound));
        assert_eq!(form.general_error, Some(MessageKey::UserNotFound));
        assert!(form.banner);
        assert_eq!(ES.get(MessageKey::UserNotFound), "Usuario incorrecto");
    }

    #[test]
    fn test_submit_wrong_password_sets_error_and_banner() {
        let mut form = LoginForm::new("dashboard", "mal");

        let outcome = form.submit(&MockAuthProvider::default(), &redirect_url());

        assert_eq!(outcome, LoginOutcome::Rejected(AuthError::WrongPassword));
        assert_eq!(form.general_error, Some(MessageKey::WrongPassword));
        assert!(form.banner);
        assert_eq!(form.username_error, None);
        assert_eq!(form.password_error, None);
    }

    #[test]
    fn test_successful_submit_clears_previous_errors() {
        let auth = MockAuthProvider::default();
        let mut form = LoginForm::new("dashboard", "mal");
        form.submit(&auth, &redirect_url());
        assert!(form.has_errors());

        form.set_password("1234");
        let outcome = form.submit(&auth, &redirect_url());

        assert!(matches!(outcome, LoginOutcome::Redirect(_)));
        assert!(!form.has_errors());
    }

    #[test]
    fn test_typing_keeps_errors_until_next_submit() {
        let mut form = LoginForm::default();
        form.submit(&MockAuthProvider::default(), &redirect_url());

        form.set_username("d");

        assert_eq!(form.username, "d");
        assert_eq!(form.username_error, Some(MessageKey::UsernameRequired));
    }

    #[test]
    fn test_credentials_are_not_trimmed() {
        let mut form = LoginForm::new(" dashboard", "1234");

        let outcome = form.submit(&MockAuthProvider::default(), &redirect_url());

        assert_eq!(outcome, LoginOutcome::Rejected(AuthError::UserNotFound));
    }

    #[test]
    fn test_mock_provider_checks_username_before_password() {
        let auth = MockAuthProvider::new(Credentials::new("admin", "secret"));

        assert_eq!(auth.authenticate("admin", "secret"), Ok(()));
        assert_eq!(auth.authenticate("nobody", "wrong"), Err(AuthError::UserNotFound));
        assert_eq!(auth.authenticate("admin", "wrong"), Err(AuthError::WrongPassword));
        assert_eq!(auth.authenticate("dashboard", "1234"), Err(AuthError::UserNotFound));
    }

    #[test]
    fn test_default_credentials() {
        let credentials = Credentials::default();

        assert_eq!(credentials.username, "dashboard");
        assert_eq!(credentials.password, "1234");
    }
}
