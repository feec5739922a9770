//! Profile screen library
//!
//! Contains the profile screen used by the executable in `src/main.rs`:
//! the profile domain (state, messages, update handlers, commands), the
//! infrastructure it talks through, and the iced views.
//!
//! Notes
//! - Update handlers are synchronous and return commands; the app layer
//!   turns commands into iced tasks. Tests drive handlers and
//!   [`domains::profile::commands::execute`] directly.

pub mod app;
pub mod domains;
pub mod infra;
pub mod views;
