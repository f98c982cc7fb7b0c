//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Category`], [`Module`] - Two-level catalog taxonomy
//! - [`FilterSelection`], [`SortKey`], [`HistorySnapshot`] - Filter state values
//! - [`Item`] - Catalog records
//! - [`Account`], [`Role`] - Local accounts
//! - [`Notification`], [`Notifier`] - User-facing messages

mod account;
mod item;
mod notification;
mod selection;
pub mod taxonomy;

pub use account::{Account, RegistrationForm, Role, avatar_for};
pub use item::Item;
pub use notification::{Notification, NotificationLevel, Notifier};
pub use selection::{FilterSelection, HistorySnapshot, SortKey};
pub use taxonomy::{Category, Module};
