//! VolunteerConnect site client.
//!
//! The thin layer between the generic fragment router in `vconnect-pages`
//! and this particular site: which paths exist, which of them require a
//! login, how the session marker is written, and how the whole thing boots
//! in a browser.

pub mod routes;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod launcher;

pub use routes::{PROTECTED_PATHS, controller, routes};
