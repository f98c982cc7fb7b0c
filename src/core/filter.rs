//! Filter state machine.
//!
//! [`FilterState`] owns the single [`FilterSelection`] for the page and is
//! the only place it changes. Every transition validates first and either
//! applies completely or leaves the selection untouched. Observers are
//! called synchronously after each transition that changed something.

use crate::core::address::AddressParams;
use crate::core::catalog::{clamp_page, normalize_search_term, page_count};
use crate::core::error::FilterError;
use crate::models::taxonomy::{Category, Module, default_module, is_valid_module};
use crate::models::{FilterSelection, HistorySnapshot, SortKey};

/// Handle returned by [`FilterState::subscribe`].
pub type SubscriptionId = u64;

type Observer = Box<dyn Fn(&StateChange)>;

/// What triggered a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// A control the user operated.
    User,
    /// Back/forward or an address restored at startup.
    Navigation,
    /// Housekeeping from the view (page clamping).
    View,
}

/// Notification delivered to observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateChange {
    pub selection: FilterSelection,
    pub origin: ChangeOrigin,
    /// Category or module differ from the previous selection.
    pub address_changed: bool,
}

impl StateChange {
    /// Whether this change should create a new history entry.
    pub fn requests_history(&self) -> bool {
        self.origin == ChangeOrigin::User && self.address_changed
    }
}

/// Category/module selection with search, sort and page.
pub struct FilterState {
    selection: FilterSelection,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: SubscriptionId,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// Start from `(All, ALL, "", Name, 1)`.
    pub fn new() -> Self {
        Self::with_selection(FilterSelection::default())
    }

    /// Start from the address the page was opened with.
    pub fn from_address(params: &AddressParams) -> Self {
        let (category, module) = params.resolve();
        Self::with_selection(FilterSelection {
            category,
            module,
            ..FilterSelection::default()
        })
    }

    fn with_selection(selection: FilterSelection) -> Self {
        debug_assert!(selection.is_consistent());
        Self {
            selection,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current selection.
    #[inline]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    // ========================================================================
    // Observers
    // ========================================================================

    pub fn subscribe(&mut self, observer: impl Fn(&StateChange) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` for an unknown id.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Select a category by key or slug.
    ///
    /// `All` forces the module wildcard; any other category snaps to its
    /// default module.
    pub fn set_category(&mut self, raw: &str) -> Result<(), FilterError> {
        let Some(category) = Category::parse(raw) else {
            log::warn!("rejected category '{}'", raw);
            return Err(FilterError::UnknownCategory(raw.to_string()));
        };

        let next = FilterSelection {
            category,
            module: default_module(category),
            page: 1,
            ..self.selection.clone()
        };
        self.commit(next, ChangeOrigin::User);
        Ok(())
    }

    /// Select a module valid for the current category.
    pub fn set_module(&mut self, raw: &str) -> Result<(), FilterError> {
        let category = self.selection.category;
        let Some(module) = Module::parse(raw).filter(|m| is_valid_module(*m, category)) else {
            log::warn!("rejected module '{}' for category '{}'", raw, category);
            return Err(FilterError::InvalidModule {
                module: raw.to_string(),
                category: category.key().to_string(),
            });
        };

        let next = FilterSelection {
            module,
            page: 1,
            ..self.selection.clone()
        };
        self.commit(next, ChangeOrigin::User);
        Ok(())
    }

    pub fn set_search_term(&mut self, term: &str) {
        let next = FilterSelection {
            search_term: normalize_search_term(term),
            page: 1,
            ..self.selection.clone()
        };
        self.commit(next, ChangeOrigin::User);
    }

    /// Change the ordering. The page goes back to 1.
    pub fn set_sort(&mut self, sort: SortKey) {
        let next = FilterSelection {
            sort,
            page: 1,
            ..self.selection.clone()
        };
        self.commit(next, ChangeOrigin::User);
    }

    /// Go to a page, clamped to `[1, max(1, max_page)]`.
    pub fn set_page(&mut self, page: usize, max_page: usize) {
        let next = FilterSelection {
            page: clamp_page(page, max_page),
            ..self.selection.clone()
        };
        self.commit(next, ChangeOrigin::User);
    }

    /// Pull the page back into range after the filtered count shrank.
    pub fn clamp_to_item_count(&mut self, count: usize, page_size: usize) {
        let page = clamp_page(self.selection.page, page_count(count, page_size));
        if page == self.selection.page {
            return;
        }
        let next = FilterSelection {
            page,
            ..self.selection.clone()
        };
        self.commit(next, ChangeOrigin::View);
    }

    /// Clear category, module and search. The sort order is kept.
    pub fn reset(&mut self) {
        let next = FilterSelection {
            sort: self.selection.sort,
            ..FilterSelection::default()
        };
        self.commit(next, ChangeOrigin::User);
    }

    /// Adopt the `(category, module)` encoded in an address.
    pub fn restore_from_address(&mut self, params: &AddressParams) {
        let (category, module) = params.resolve();
        self.restore(category, module);
    }

    /// Adopt a history entry.
    ///
    /// A snapshot is restored as recorded. Without one (entries the
    /// synchronizer did not create) the address decides.
    pub fn apply_history_entry(
        &mut self,
        snapshot: Option<&HistorySnapshot>,
        params: &AddressParams,
    ) {
        match snapshot {
            Some(snapshot) => {
                let category = snapshot.category;
                let module = if category.is_all() {
                    Module::ALL
                } else if is_valid_module(snapshot.module, category) {
                    snapshot.module
                } else {
                    default_module(category)
                };
                self.restore(category, module);
            }
            None => self.restore_from_address(params),
        }
    }

    fn restore(&mut self, category: Category, module: Module) {
        let next = FilterSelection {
            category,
            module,
            page: 1,
            ..self.selection.clone()
        };
        self.commit(next, ChangeOrigin::Navigation);
    }

    fn commit(&mut self, next: FilterSelection, origin: ChangeOrigin) {
        debug_assert!(next.is_consistent());
        if next == self.selection {
            return;
        }

        let address_changed = !next.same_address(&self.selection);
        self.selection = next;
        log::debug!(
            "filter -> {}/{} search='{}' sort={} page={} ({:?})",
            self.selection.category,
            self.selection.module,
            self.selection.search_term,
            self.selection.sort.key(),
            self.selection.page,
            origin
        );

        let change = StateChange {
            selection: self.selection.clone(),
            origin,
            address_changed,
        };
        for (_, observer) in &self.observers {
            observer(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(state: &mut FilterState) -> Rc<RefCell<Vec<StateChange>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        state.subscribe(move |change| sink.borrow_mut().push(change.clone()));
        log
    }

    fn module(key: &str) -> Module {
        Module::parse(key).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = FilterState::new();
        assert_eq!(state.selection(), &FilterSelection::default());
    }

    #[test]
    fn test_from_address() {
        let state = FilterState::from_address(&AddressParams::parse("?cat=服装&mod=头盔"));
        assert_eq!(state.selection().category, Category::Clothing);
        assert_eq!(state.selection().module, module("头盔"));

        let state = FilterState::from_address(&AddressParams::parse("?cat=nope"));
        assert_eq!(state.selection(), &FilterSelection::default());
    }

    #[test]
    fn test_set_category_snaps_to_default() {
        let mut state = FilterState::new();
        let log = recorder(&mut state);

        state.set_category("武器").unwrap();
        assert_eq!(state.selection().category, Category::Weapons);
        assert_eq!(state.selection().module, module("枪械"));

        let changes = log.borrow();
        assert_eq!(changes.len(), 1);
        assert!(changes[0].requests_history());
    }

    #[test]
    fn test_set_category_all_forces_module_all() {
        let mut state = FilterState::new();
        state.set_category("载具").unwrap();
        state.set_module("船只").unwrap();
        state.set_category("全部").unwrap();
        assert_eq!(state.selection().category, Category::All);
        assert_eq!(state.selection().module, Module::ALL);
    }

    #[test]
    fn test_reselect_category_snaps_back_to_default() {
        let mut state = FilterState::new();
        state.set_category("武器").unwrap();
        state.set_module("配件").unwrap();
        state.set_category("武器").unwrap();
        assert_eq!(state.selection().module, module("枪械"));
    }

    #[test]
    fn test_invalid_category_rejected_without_notify() {
        crate::utils::logging::init_for_tests();
        let mut state = FilterState::new();
        state.set_category("工具").unwrap();
        let before = state.selection().clone();
        let log = recorder(&mut state);

        let err = state.set_category("魔法").unwrap_err();
        assert_eq!(err, FilterError::UnknownCategory("魔法".into()));
        assert_eq!(state.selection(), &before);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_module_must_belong_to_category() {
        crate::utils::logging::init_for_tests();
        let mut state = FilterState::new();
        assert!(state.set_module("枪械").is_err());
        assert!(state.set_module("全部").is_ok());

        state.set_category("武器").unwrap();
        let before = state.selection().clone();
        assert!(state.set_module("汽车").is_err());
        assert_eq!(state.selection(), &before);

        state.set_module("全部").unwrap();
        assert_eq!(state.selection().module, Module::ALL);
        assert!(state.selection().is_consistent());
    }

    #[test]
    fn test_noop_transitions_do_not_notify() {
        let mut state = FilterState::new();
        let log = recorder(&mut state);

        state.set_category("全部").unwrap();
        state.set_module("全部").unwrap();
        state.set_search_term("   ");
        state.set_sort(SortKey::Name);
        state.set_page(1, 5);
        state.reset();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_search_sort_page_never_request_history() {
        let mut state = FilterState::new();
        let log = recorder(&mut state);

        state.set_page(2, 3);
        state.set_search_term("  Sniper ");
        state.set_page(3, 3);
        state.set_sort(SortKey::Size);

        let changes = log.borrow();
        assert_eq!(changes.len(), 4);
        assert!(changes.iter().all(|c| !c.requests_history()));
        assert_eq!(state.selection().search_term, "sniper");
        assert_eq!(state.selection().sort, SortKey::Size);
        assert_eq!(state.selection().page, 1);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = FilterState::new();
        state.set_page(10, 4);
        assert_eq!(state.selection().page, 4);
        state.set_page(0, 4);
        assert_eq!(state.selection().page, 1);
        state.set_page(3, 0);
        assert_eq!(state.selection().page, 1);
    }

    #[test]
    fn test_clamp_to_item_count() {
        let mut state = FilterState::new();
        state.set_page(5, 5);
        let log = recorder(&mut state);

        state.clamp_to_item_count(30, 12);
        assert_eq!(state.selection().page, 3);
        state.clamp_to_item_count(30, 12);
        state.clamp_to_item_count(0, 12);
        assert_eq!(state.selection().page, 1);

        let changes = log.borrow();
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.origin == ChangeOrigin::View));
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = FilterState::new();
        state.set_page(3, 5);
        state.set_category("功能").unwrap();
        assert_eq!(state.selection().page, 1);
    }

    #[test]
    fn test_reset_keeps_sort() {
        let mut state = FilterState::new();
        state.set_category("建筑").unwrap();
        state.set_search_term("door");
        state.set_sort(SortKey::Date);
        let log = recorder(&mut state);

        state.reset();
        let selection = state.selection();
        assert_eq!(selection.category, Category::All);
        assert_eq!(selection.module, Module::ALL);
        assert_eq!(selection.search_term, "");
        assert_eq!(selection.sort, SortKey::Date);
        assert!(log.borrow()[0].requests_history());
    }

    #[test]
    fn test_restore_from_address_never_requests_history() {
        let mut state = FilterState::new();
        let log = recorder(&mut state);

        state.restore_from_address(&AddressParams::parse("?cat=载具&mod=直升机"));
        assert_eq!(state.selection().module, module("直升机"));

        state.restore_from_address(&AddressParams::parse("?cat=载具&mod=枪械"));
        assert_eq!(state.selection().module, module("汽车"));

        let changes = log.borrow();
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.origin == ChangeOrigin::Navigation));
        assert!(changes.iter().all(|c| !c.requests_history()));
    }

    #[test]
    fn test_apply_history_entry_prefers_snapshot() {
        let mut state = FilterState::new();
        let snapshot = HistorySnapshot {
            category: Category::Weapons,
            module: module("配件"),
            timestamp: 1.0,
        };
        state.apply_history_entry(Some(&snapshot), &AddressParams::parse("?cat=载具"));
        assert_eq!(state.selection().category, Category::Weapons);
        assert_eq!(state.selection().module, module("配件"));

        state.apply_history_entry(None, &AddressParams::parse("?cat=载具"));
        assert_eq!(state.selection().category, Category::Vehicles);
        assert_eq!(state.selection().module, module("汽车"));
    }

    #[test]
    fn test_apply_history_entry_repairs_inconsistent_snapshot() {
        let mut state = FilterState::new();
        let snapshot = HistorySnapshot {
            category: Category::Tools,
            module: module("汽车"),
            timestamp: 1.0,
        };
        state.apply_history_entry(Some(&snapshot), &AddressParams::default());
        assert_eq!(state.selection().module, module("修理工具"));

        let snapshot = HistorySnapshot {
            category: Category::All,
            module: module("汽车"),
            timestamp: 2.0,
        };
        state.apply_history_entry(Some(&snapshot), &AddressParams::default());
        assert_eq!(state.selection(), &FilterSelection::default());
    }

    #[test]
    fn test_unsubscribe() {
        let mut state = FilterState::new();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.set_category("武器").unwrap();
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.set_category("服装").unwrap();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_invariants_hold_under_mixed_inputs() {
        let mut state = FilterState::new();
        let inputs = [
            ("cat", "武器"),
            ("mod", "汽车"),
            ("mod", "投掷武器"),
            ("cat", "全部"),
            ("mod", "投掷武器"),
            ("cat", "features"),
            ("mod", "AI系统"),
            ("cat", "???"),
            ("mod", ""),
            ("cat", "服装"),
        ];
        for (kind, value) in inputs {
            let _ = match kind {
                "cat" => state.set_category(value),
                _ => state.set_module(value),
            };
            assert!(state.selection().is_consistent(), "after {kind}={value}");
        }
    }
}
