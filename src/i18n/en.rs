use super::Messages;

pub const EN: Messages = Messages {
    title: "Sign in",
    username: "User",
    password: "Password",
    login: "Log in",
    username_required: "Username is required",
    password_required: "Password is required",
    user_not_found: "Incorrect username",
    wrong_password: "Incorrect password",
    validation_failed: "An error occurred while validating the data entered",
    forgot_password: "Forgot your password?",
    recovery_title: "Password reset",
    recovery_placeholder: "Enter the email associated with your account",
    recovery_submit: "Send",
    recovery_close: "Close",
    invalid_email: "Error: Enter a valid email",
    recovery_success: "Form sent successfully",
    language_es: "Spanish",
    language_en: "English",
    dark_mode: "Dark mode",
    light_mode: "Light mode",
};
