//! Application router component.
//!
//! The query string is the source of truth:
//! - `?item=<id>` shows the detail view for one item
//! - anything else shows the catalog, filtered by `cat` / `mod`
//!
//! Back/forward arrives as `popstate` and is handed to the filter state
//! through [`AppContext::handle_navigation`], which never pushes history.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::auth::AuthDialog;
use crate::components::catalog::CatalogPage;
use crate::components::details::ItemDetails;
use crate::components::header::AppHeader;
use crate::components::toast::ToastStack;

stylance::import_crate_style!(css, "src/components/layout.module.css");

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        use crate::core::history::snapshot_from_js;

        let closure = Closure::wrap(Box::new(move |event: web_sys::PopStateEvent| {
            ctx.handle_navigation(snapshot_from_js(event.state()));
        }) as Box<dyn Fn(web_sys::PopStateEvent)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <div class=css::layout>
            <AppHeader />
            <main class=css::main>
                {move || match ctx.item_id.get() {
                    Some(id) => view! { <ItemDetails id=id /> }.into_any(),
                    None => view! { <CatalogPage /> }.into_any(),
                }}
            </main>
            <AuthDialog />
            <ToastStack />
        </div>
    }
}
