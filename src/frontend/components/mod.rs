//! Reusable UI components for the login screen

mod alert;
mod button;
mod input;
mod modal;
mod toggles;

pub use alert::{ErrorAlert, SuccessAlert};
pub use button::{Button, ButtonVariant};
pub use input::{PasswordInput, TextInput};
pub use modal::RecoveryModal;
pub use toggles::{LanguageToggle, ThemeToggle};
