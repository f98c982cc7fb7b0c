//! Search box, sort selector and reset control.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::SEARCH_DEBOUNCE_MS;
use crate::models::SortKey;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Raw input text; the filter only sees it once typing pauses.
    let term = RwSignal::new(ctx.selection.with_untracked(|s| s.search_term.clone()));
    let generation = StoredValue::new(0u64);

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        term.set(value.clone());

        let current = generation.get_value() + 1;
        generation.set_value(current);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // Superseded by a later keystroke.
            if generation.get_value() == current {
                ctx.search(&value);
            }
        });
    };

    let on_sort = move |ev: leptos::ev::Event| {
        match SortKey::parse(&event_target_value(&ev)) {
            Some(sort) => ctx.sort_by(sort),
            None => log::warn!("unknown sort key"),
        }
    };

    let on_reset = move |_: leptos::ev::MouseEvent| {
        generation.update_value(|g| *g += 1);
        term.set(String::new());
        ctx.reset_filters();
    };

    view! {
        <div class=css::toolbar>
            <label class=css::search>
                <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                <input
                    id="modSearch"
                    type="search"
                    placeholder="搜索模组名称或描述..."
                    prop:value=move || term.get()
                    on:input=on_input
                />
            </label>

            <label class=css::sort>
                <span class=css::sortIcon><Icon icon=ic::SORT /></span>
                <select
                    prop:value=move || ctx.selection.with(|s| s.sort.key())
                    on:change=on_sort
                >
                    {SortKey::LIST
                        .into_iter()
                        .map(|sort| view! { <option value=sort.key()>{sort.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <button class=css::resetButton title="重置筛选" on:click=on_reset>
                <Icon icon=ic::RESET />
                <span>"重置"</span>
            </button>
        </div>
    }
}
