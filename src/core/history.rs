//! Binding between the filter state and the navigable address.
//!
//! [`UrlSynchronizer`] observes [`FilterState`] and pushes one history
//! entry per user-driven category/module change. Back/forward comes back
//! through [`UrlSynchronizer::on_navigation`], which never pushes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::core::address::{AddressParams, to_query};
use crate::core::filter::{FilterState, SubscriptionId};
use crate::models::{FilterSelection, HistorySnapshot};
use crate::utils::dom;

// ============================================================================
// Backends
// ============================================================================

/// Session history the synchronizer writes to.
pub trait HistoryBackend {
    /// Push a new entry. `query` is empty or starts with `?`.
    fn push(&self, query: &str, snapshot: &HistorySnapshot);

    /// Query string of the current entry, `?` included when non-empty.
    fn current_query(&self) -> String;
}

/// `window.history` backed implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl HistoryBackend for BrowserHistory {
    fn push(&self, query: &str, snapshot: &HistorySnapshot) {
        let Some(window) = dom::window() else {
            log::warn!("history push skipped: no window");
            return;
        };
        let Ok(history) = window.history() else {
            log::warn!("history push skipped: history unavailable");
            return;
        };

        let url = format!("{}{}", dom::pathname(), query);
        let state = serde_wasm_bindgen::to_value(snapshot).unwrap_or(JsValue::NULL);
        if let Err(err) = history.push_state_with_url(&state, "", Some(&url)) {
            log::warn!("history push failed: {:?}", err);
        }
    }

    fn current_query(&self) -> String {
        dom::location_search()
    }
}

/// Decode the state object of a `popstate` event.
///
/// Entries not created by the synchronizer carry `null` or foreign data
/// and yield `None`.
pub fn snapshot_from_js(state: JsValue) -> Option<HistorySnapshot> {
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(state).ok()
}

/// One entry of a [`MemoryHistory`].
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub query: String,
    pub snapshot: Option<HistorySnapshot>,
}

/// In-memory session history with back/forward.
///
/// Pushing drops every entry after the cursor, like a browser does.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Vec<HistoryEntry>>,
    cursor: Cell<usize>,
}

impl MemoryHistory {
    /// History holding a single entry without a snapshot.
    pub fn new(initial_query: &str) -> Self {
        Self {
            entries: RefCell::new(vec![HistoryEntry {
                query: initial_query.to_string(),
                snapshot: None,
            }]),
            cursor: Cell::new(0),
        }
    }

    /// Step back. Returns the entry now current, `None` at the start.
    pub fn back(&self) -> Option<HistoryEntry> {
        let cursor = self.cursor.get();
        if cursor == 0 {
            return None;
        }
        self.cursor.set(cursor - 1);
        Some(self.current())
    }

    /// Step forward. Returns the entry now current, `None` at the end.
    pub fn forward(&self) -> Option<HistoryEntry> {
        let cursor = self.cursor.get();
        if cursor + 1 >= self.entries.borrow().len() {
            return None;
        }
        self.cursor.set(cursor + 1);
        Some(self.current())
    }

    pub fn current(&self) -> HistoryEntry {
        self.entries.borrow()[self.cursor.get()].clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.borrow().clone()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl HistoryBackend for MemoryHistory {
    fn push(&self, query: &str, snapshot: &HistorySnapshot) {
        let mut entries = self.entries.borrow_mut();
        entries.truncate(self.cursor.get() + 1);
        entries.push(HistoryEntry {
            query: query.to_string(),
            snapshot: Some(snapshot.clone()),
        });
        self.cursor.set(entries.len() - 1);
    }

    fn current_query(&self) -> String {
        self.current().query
    }
}

// ============================================================================
// Synchronizer
// ============================================================================

/// Milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}

/// Keeps the address and session history in step with a [`FilterState`].
#[derive(Clone)]
pub struct UrlSynchronizer {
    backend: Rc<dyn HistoryBackend>,
    clock: Rc<dyn Fn() -> f64>,
    last_timestamp: Rc<Cell<f64>>,
}

impl UrlSynchronizer {
    pub fn new(backend: Rc<dyn HistoryBackend>) -> Self {
        Self::with_clock(backend, now_ms)
    }

    pub fn with_clock(backend: Rc<dyn HistoryBackend>, clock: impl Fn() -> f64 + 'static) -> Self {
        Self {
            backend,
            clock: Rc::new(clock),
            last_timestamp: Rc::new(Cell::new(f64::NEG_INFINITY)),
        }
    }

    /// Subscribe to `state`; user-driven address changes push an entry.
    pub fn attach(&self, state: &mut FilterState) -> SubscriptionId {
        let sync = self.clone();
        state.subscribe(move |change| {
            if change.requests_history() {
                sync.push(&change.selection);
            }
        })
    }

    /// Handle back/forward: restore from the entry's snapshot, or from the
    /// current address when the entry has none.
    pub fn on_navigation(&self, state: &mut FilterState, snapshot: Option<HistorySnapshot>) {
        let params = AddressParams::parse(&self.backend.current_query());
        log::debug!("navigation: snapshot={:?} params={:?}", snapshot, params);
        state.apply_history_entry(snapshot.as_ref(), &params);
    }

    fn push(&self, selection: &FilterSelection) {
        let snapshot = HistorySnapshot::of(selection, self.next_timestamp());
        let query = to_query(selection);
        log::debug!("history push '{}'", query);
        self.backend.push(&query, &snapshot);
    }

    /// Wall clock, bumped when it fails to advance.
    fn next_timestamp(&self) -> f64 {
        let last = self.last_timestamp.get();
        let now = (self.clock)();
        let ts = if now > last { now } else { last + 1.0 };
        self.last_timestamp.set(ts);
        ts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Module};

    fn setup(initial: &str) -> (FilterState, Rc<MemoryHistory>, UrlSynchronizer) {
        let history = Rc::new(MemoryHistory::new(initial));
        let sync = UrlSynchronizer::with_clock(history.clone(), || 1000.0);
        let mut state = FilterState::from_address(&AddressParams::parse(initial));
        sync.attach(&mut state);
        (state, history, sync)
    }

    fn back(state: &mut FilterState, history: &MemoryHistory, sync: &UrlSynchronizer) {
        let entry = history.back().expect("can go back");
        sync.on_navigation(state, entry.snapshot);
    }

    #[test]
    fn test_category_change_pushes_entry() {
        let (mut state, history, _sync) = setup("");
        state.set_category("武器").unwrap();

        assert_eq!(history.len(), 2);
        let entry = history.current();
        let snapshot = entry.snapshot.unwrap();
        assert_eq!(snapshot.category, Category::Weapons);
        assert_eq!(snapshot.module.key(), "枪械");
        assert_eq!(
            AddressParams::parse(&entry.query).resolve(),
            (Category::Weapons, snapshot.module)
        );
    }

    #[test]
    fn test_search_sort_page_do_not_push() {
        let (mut state, history, _sync) = setup("");
        state.set_search_term("rifle");
        state.set_sort(crate::models::SortKey::Popularity);
        state.set_page(2, 4);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_rejected_transition_does_not_push() {
        let (mut state, history, _sync) = setup("");
        assert!(state.set_module("枪械").is_err());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_back_restores_previous_selection_without_pushing() {
        let (mut state, history, sync) = setup("");
        state.set_category("武器").unwrap();
        state.set_module("配件").unwrap();
        assert_eq!(history.len(), 3);

        back(&mut state, &history, &sync);
        assert_eq!(state.selection().category, Category::Weapons);
        assert_eq!(state.selection().module.key(), "枪械");
        assert_eq!(history.len(), 3);

        back(&mut state, &history, &sync);
        assert_eq!(state.selection().category, Category::All);
        assert_eq!(state.selection().module, Module::ALL);

        let entry = history.forward().unwrap();
        sync.on_navigation(&mut state, entry.snapshot);
        assert_eq!(state.selection().module.key(), "枪械");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_initial_entry_without_snapshot_uses_address() {
        let (mut state, history, sync) = setup("?cat=载具&mod=船只");
        assert_eq!(state.selection().module.key(), "船只");

        state.set_category("工具").unwrap();
        back(&mut state, &history, &sync);
        assert_eq!(state.selection().category, Category::Vehicles);
        assert_eq!(state.selection().module.key(), "船只");
    }

    #[test]
    fn test_push_after_back_discards_forward_entries() {
        let (mut state, history, sync) = setup("");
        state.set_category("武器").unwrap();
        state.set_category("服装").unwrap();
        back(&mut state, &history, &sync);
        state.set_category("建筑").unwrap();

        assert_eq!(history.len(), 3);
        assert!(history.forward().is_none());
        let last = history.entries().pop().unwrap();
        assert_eq!(last.snapshot.unwrap().category, Category::Building);
    }

    #[test]
    fn test_timestamps_strictly_increase() {
        let (mut state, history, _sync) = setup("");
        state.set_category("武器").unwrap();
        state.set_category("服装").unwrap();
        state.set_category("载具").unwrap();

        let stamps: Vec<f64> = history
            .entries()
            .into_iter()
            .filter_map(|e| e.snapshot.map(|s| s.timestamp))
            .collect();
        assert_eq!(stamps.len(), 3);
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_reset_pushes_only_when_address_changes() {
        let (mut state, history, _sync) = setup("");
        state.set_search_term("kit");
        state.reset();
        assert_eq!(history.len(), 1);

        state.set_category("功能").unwrap();
        state.reset();
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_query(), "");
    }
}
