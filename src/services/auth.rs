use serde::{Deserialize, Serialize};

use crate::common::AuthError;

pub const DEFAULT_USERNAME: &str = "dashboard";
pub const DEFAULT_PASSWORD: &str = "1234";

/// Checks a username/password pair. Swap the implementation to talk to a
/// real backend; the form logic only sees this trait.
pub trait AuthProvider: Send + Sync {
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError>;
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

/// Accepts exactly one hardcoded pair.
#[derive(Debug, Clone, Default)]
pub struct MockAuthProvider {
    credentials: Credentials,
}

impl MockAuthProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl AuthProvider for MockAuthProvider {
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        // Username is checked first so an unknown user never reports a
        // password mismatch.
        if username != self.credentials.username {
            return Err(AuthError::UserNotFound);
        }
        if password != self.credentials.password {
            return Err(AuthError::WrongPassword);
        }

        Ok(())
    }
}
