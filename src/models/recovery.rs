use serde::{Deserialize, Serialize};

use crate::i18n::MessageKey;
use crate::services::validate_email;

/// Password-reset dialog. Nothing is sent anywhere; a valid address only
/// flips the dialog into its success state.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RecoveryForm {
    pub open: bool,
    pub email: String,
    pub error: Option<MessageKey>,
    pub success: bool,
}

impl RecoveryForm {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the dialog and forgets whatever was typed into it.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn submit(&mut self) -> bool {
        if validate_email(&self.email) {
            self.error = None;
            self.success = true;
        } else {
            self.error = Some(MessageKey::InvalidEmail);
            self.success = false;
        }

        self.success
    }
}
