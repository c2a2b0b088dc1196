//! Request middleware: authentication extractors and session layer.

pub mod auth;
pub mod session;

pub use auth::{RequireAuth, set_current_user, set_flash, take_flash};
pub use session::create_session_layer;
