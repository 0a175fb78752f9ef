pub use locale::*;
pub use login::*;
pub use recovery::*;
pub use theme::*;

mod locale;
mod login;
mod recovery;
mod theme;
