//! Item repository: the read path for catalog records.

use serde_json::Value;

use crate::config::storage_keys;
use crate::core::storage::{KeyValueStore, load_json};
use crate::models::Item;

/// Read-only source of catalog items.
pub trait ItemRepository {
    /// Every item, in repository order.
    fn list(&self) -> Vec<Item>;

    /// Look up a single item by id.
    fn find(&self, id: &str) -> Option<Item> {
        self.list().into_iter().find(|item| item.id == id)
    }
}

/// Items saved by the admin tooling, followed by the bundled presets.
///
/// A stored item shadows a preset with the same id.
pub struct StoredItemRepository<S> {
    store: S,
    presets: Vec<Item>,
}

impl<S: KeyValueStore> StoredItemRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_presets(store, Vec::new())
    }

    pub fn with_presets(store: S, presets: Vec<Item>) -> Self {
        Self { store, presets }
    }

    /// Items from storage only.
    ///
    /// Missing or corrupted data yields none; a malformed record is skipped
    /// without hiding the others.
    pub fn stored(&self) -> Vec<Item> {
        let records: Vec<Value> = load_json(&self.store, storage_keys::ITEMS).unwrap_or_default();
        decode_records(records, storage_keys::ITEMS)
    }
}

impl<S: KeyValueStore> ItemRepository for StoredItemRepository<S> {
    fn list(&self) -> Vec<Item> {
        let mut items = self.stored();
        let presets = self
            .presets
            .iter()
            .filter(|preset| !items.iter().any(|item| item.id == preset.id))
            .cloned()
            .collect::<Vec<_>>();
        items.extend(presets);
        items
    }
}

/// Parse the bundled preset catalog. Invalid JSON is logged and ignored.
pub fn parse_presets(json: &str) -> Vec<Item> {
    match serde_json::from_str::<Vec<Value>>(json) {
        Ok(records) => decode_records(records, "presets"),
        Err(err) => {
            log::error!("invalid preset catalog: {}", err);
            Vec::new()
        }
    }
}

fn decode_records(records: Vec<Value>, source: &str) -> Vec<Item> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| match serde_json::from_value::<Item>(record) {
            Ok(item) => Some(item),
            Err(err) => {
                log::warn!("skipping {} record #{}: {}", source, idx, err);
                None
            }
        })
        .collect()
}
