use regex::Regex;
use std::sync::OnceLock;

static EMAIL: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern")
    })
}

/// Loose format check: something, an `@`, something, a dot, something.
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    !email.is_empty() && email_pattern().is_match(email)
}
