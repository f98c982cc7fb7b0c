//! Page navigation under the grid.
//!
//! Wide layouts get one button per page; compact layouts only a
//! "current / total" indicator between the arrows.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::COMPACT_LAYOUT_QUERY;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

#[component]
pub fn Pagination() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_compact = use_media_query(COMPACT_LAYOUT_QUERY);

    let state = Memo::new(move |_| {
        ctx.view.with(|view| {
            (
                view.page,
                view.page_count,
                view.has_prev,
                view.has_next,
                view.show_pagination(),
            )
        })
    });
    let page = move || state.get().0;
    let page_count = move || state.get().1;

    view! {
        <Show when=move || state.get().4>
            <nav class=css::pagination aria-label="分页">
                <button
                    class=css::pageButton
                    disabled=move || !state.get().2
                    title="上一页"
                    on:click=move |_| ctx.go_to_page(page().saturating_sub(1))
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>

                {move || {
                    if is_compact.get() {
                        view! {
                            <span class=css::pageIndicator>
                                {format!("{} / {}", page(), page_count())}
                            </span>
                        }
                        .into_any()
                    } else {
                        (1..=page_count())
                            .map(|n| view! { <PageButton n=n current=page() /> })
                            .collect_view()
                            .into_any()
                    }
                }}

                <button
                    class=css::pageButton
                    disabled=move || !state.get().3
                    title="下一页"
                    on:click=move |_| ctx.go_to_page(page() + 1)
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </nav>
        </Show>
    }
}

#[component]
fn PageButton(n: usize, current: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let class = if n == current {
        format!("{} {}", css::pageButton, css::pageButtonActive)
    } else {
        css::pageButton.to_string()
    };

    view! {
        <button
            class=class
            aria-current=(n == current).then_some("page")
            on:click=move |_| ctx.go_to_page(n)
        >
            {n}
        </button>
    }
}
