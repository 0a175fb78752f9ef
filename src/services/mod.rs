pub use auth::*;
pub use theme::*;
pub use validation::*;

mod auth;
mod theme;
mod validation;
