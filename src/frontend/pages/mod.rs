//! Page components for the login frontend

mod login;

pub use login::LoginPage;
