//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::{NOTIFICATION_MS, PAGE_SIZE, PRESET_CATALOG};
use crate::core::accounts::AccountStore;
use crate::core::address::AddressParams;
use crate::core::error::AuthError;
use crate::core::repository::parse_presets;
use crate::core::{
    BrowserHistory, BrowserStorage, CatalogView, FilterState, ItemRepository,
    StoredItemRepository, UrlSynchronizer,
};
use crate::models::{
    Account, FilterSelection, HistorySnapshot, Item, Notification, NotificationLevel, Notifier,
    RegistrationForm, SortKey,
};
use crate::utils::dom;

// ============================================================================
// AuthDialog
// ============================================================================

/// Which tab of the account dialog is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Register,
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// [`FilterState`] is a plain object kept in a local [`StoredValue`]; every
/// mutation goes through it. An observer mirrors each committed selection
/// into the `selection` signal, which the components read. The
/// [`UrlSynchronizer`] observes the same state and writes history.
#[derive(Clone, Copy)]
pub struct AppContext {
    filter: StoredValue<FilterState, LocalStorage>,
    sync: StoredValue<UrlSynchronizer, LocalStorage>,

    /// Mirror of the committed filter selection.
    pub selection: RwSignal<FilterSelection>,

    /// Catalog records (stored items followed by presets).
    pub items: RwSignal<Vec<Item>>,

    /// Projection of `selection` over `items`.
    pub view: Memo<CatalogView>,

    /// Item shown in the detail view, from `?item=`.
    pub item_id: RwSignal<Option<String>>,

    /// Signed-in account.
    pub account: RwSignal<Option<Account>>,

    /// Open account dialog tab, if any.
    pub auth_dialog: RwSignal<Option<AuthTab>>,

    /// Visible toasts, oldest first.
    pub toasts: RwSignal<Vec<Notification>>,
    next_toast_id: StoredValue<u64>,
}

impl AppContext {
    /// Creates the context from the current address and storage.
    pub fn new() -> Self {
        let params = AddressParams::parse(&dom::location_search());
        let mut filter = FilterState::from_address(&params);
        let selection = RwSignal::new(filter.selection().clone());

        filter.subscribe(move |change| selection.set(change.selection.clone()));
        let sync = UrlSynchronizer::new(Rc::new(BrowserHistory));
        sync.attach(&mut filter);

        let repository =
            StoredItemRepository::with_presets(BrowserStorage, parse_presets(PRESET_CATALOG));
        let items = RwSignal::new(repository.list());
        log::info!("catalog loaded: {} items", items.with_untracked(Vec::len));

        let accounts = AccountStore::new(BrowserStorage);
        if let Err(err) = accounts.seed_defaults() {
            log::warn!("could not seed accounts: {}", err);
        }

        let view = Memo::new(move |_| {
            selection.with(|selection| {
                items.with(|items| CatalogView::project(selection, items, PAGE_SIZE))
            })
        });

        Self {
            filter: StoredValue::new_local(filter),
            sync: StoredValue::new_local(sync),
            selection,
            items,
            view,
            item_id: RwSignal::new(params.item),
            account: RwSignal::new(accounts.current()),
            auth_dialog: RwSignal::new(None),
            toasts: RwSignal::new(Vec::new()),
            next_toast_id: StoredValue::new(0),
        }
    }

    // ========================================================================
    // Filter actions
    // ========================================================================

    /// Select a category. Unknown keys are logged and ignored.
    pub fn select_category(&self, key: &str) {
        self.filter.update_value(|state| {
            let _ = state.set_category(key);
        });
    }

    /// Select a module of the current category. Invalid keys are ignored.
    pub fn select_module(&self, key: &str) {
        self.filter.update_value(|state| {
            let _ = state.set_module(key);
        });
    }

    pub fn search(&self, term: &str) {
        self.filter.update_value(|state| state.set_search_term(term));
    }

    pub fn sort_by(&self, sort: SortKey) {
        self.filter.update_value(|state| state.set_sort(sort));
    }

    pub fn go_to_page(&self, page: usize) {
        let max_page = self.view.with_untracked(|view| view.page_count);
        self.filter
            .update_value(|state| state.set_page(page, max_page));
        dom::scroll_to_top();
    }

    pub fn reset_filters(&self) {
        self.filter.update_value(|state| state.reset());
    }

    /// Keep the stored page inside the range the current results allow.
    pub fn clamp_page(&self, count: usize) {
        self.filter
            .update_value(|state| state.clamp_to_item_count(count, PAGE_SIZE));
    }

    /// Back/forward handler.
    pub fn handle_navigation(&self, snapshot: Option<HistorySnapshot>) {
        self.item_id
            .set(AddressParams::parse(&dom::location_search()).item);
        let sync = self.sync.get_value();
        self.filter
            .update_value(|state| sync.on_navigation(state, snapshot));
    }

    // ========================================================================
    // Account actions
    // ========================================================================

    fn accounts(&self) -> AccountStore<BrowserStorage> {
        AccountStore::new(BrowserStorage)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let account = self.accounts().login(username, password)?;
        self.notify(
            &format!("欢迎回来，{}！", account.username),
            NotificationLevel::Success,
        );
        self.account.set(Some(account));
        self.auth_dialog.set(None);
        Ok(())
    }

    pub fn register(&self, form: &RegistrationForm) -> Result<(), AuthError> {
        let account = self.accounts().register(form)?;
        self.notify("注册成功！", NotificationLevel::Success);
        self.account.set(Some(account));
        self.auth_dialog.set(None);
        Ok(())
    }

    pub fn logout(&self) {
        if let Err(err) = self.accounts().logout() {
            log::warn!("logout failed: {}", err);
        }
        self.account.set(None);
        self.notify("您已成功登出", NotificationLevel::Info);
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for AppContext {
    /// Show a toast that dismisses itself after `NOTIFICATION_MS`.
    fn notify(&self, message: &str, level: NotificationLevel) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Notification {
                id,
                message: message.to_string(),
                level,
            })
        });

        let ctx = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_MS).await;
            ctx.dismiss_toast(id);
        });
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Keeps the stored page in range as results change
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    Effect::new(move |_| {
        let (page, total) = ctx.view.with(|view| (view.page, view.total));
        if ctx.selection.with_untracked(|s| s.page) != page {
            ctx.clamp_page(total);
        }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #1b1d17;
                    color: #e6e2d3;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #e07a5f; margin-bottom: 1rem;">"页面出错了"</h1>
                        <p style="color: #a8a492; margin-bottom: 2rem;">
                            "发生了意外错误，请尝试刷新页面。"
                        </p>
                        <ul style="text-align: left; color: #e07a5f; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = dom::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #81b29a;
                                color: #1b1d17;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "刷新页面"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
