//! UI components built with Leptos.
//!
//! - [`router`] - Query-string routing and back/forward handling (main entry point)
//! - [`catalog`] - Filter controls, toolbar, result grid, pagination
//! - [`details`] - Single item view
//! - [`header`] - Title and account controls
//! - [`auth`] - Login / registration dialog
//! - [`toast`] - Notification stack
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod auth;
pub mod catalog;
pub mod details;
pub mod header;
pub mod icons;
pub mod router;
pub mod toast;

pub use router::AppRouter;
