//! Utility modules for DOM access, formatting and logging.
//!
//! Provides:
//! - [`dom`] - Window, localStorage and location helpers
//! - [`format`] - Date and counter formatting
//! - [`logging`] - Console backend for the `log` facade

pub mod dom;
pub mod format;
pub mod logging;
