use thiserror::Error;

use crate::i18n::MessageKey;

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,
}

impl AuthError {
    /// Message shown under the form for this failure.
    pub fn message_key(&self) -> MessageKey {
        match self {
            Self::UserNotFound => MessageKey::UserNotFound,
            Self::WrongPassword => MessageKey::WrongPassword,
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Theme storage is unavailable")]
    Unavailable,

    #[error("Failed to write theme: {0}")]
    Write(String),
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ConfigError {
    #[error("Invalid redirect URL {value:?}: {reason}")]
    InvalidRedirectUrl { value: String, reason: String },

    #[error("Invalid bind address {0:?}")]
    InvalidBindAddr(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{0} is set but empty")]
    EmptyCredential(&'static str),
}
