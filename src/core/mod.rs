//! Core business logic for the catalog.
//!
//! This module provides:
//! - [`FilterState`] category/module state machine with typed observers
//! - [`UrlSynchronizer`] binding the state to the address and history
//! - [`catalog`] filtering, sorting and pagination, projected by [`CatalogView`]
//! - [`ItemRepository`] and [`AccountStore`] over a [`KeyValueStore`]

pub mod accounts;
pub mod address;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod history;
pub mod repository;
pub mod storage;
pub mod view;

pub use accounts::AccountStore;
pub use address::{AddressParams, to_query};
pub use filter::{ChangeOrigin, FilterState, StateChange, SubscriptionId};
pub use history::{BrowserHistory, HistoryBackend, MemoryHistory, UrlSynchronizer};
pub use repository::{ItemRepository, StoredItemRepository};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStore};
pub use view::CatalogView;
