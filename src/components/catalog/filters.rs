//! Category and module controls.
//!
//! Buttons carry their taxonomy key in `data-category` / `data-module`;
//! display text never takes part in selection.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::CatalogView;
use crate::core::view::{CategoryControl, ModuleControl};

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let categories = Memo::new(move |_| ctx.view.with(|view| view.categories.clone()));
    let modules = Memo::new(move |_| ctx.view.with(|view| view.modules.clone()));
    let show_modules = Memo::new(move |_| ctx.view.with(CatalogView::show_modules));

    view! {
        <nav class=css::filterBar aria-label="模组分类">
            <div class=css::chipRow>
                <For
                    each=move || categories.get()
                    key=|control| (control.category, control.active)
                    children=|control| view! { <CategoryButton control=control /> }
                />
            </div>

            <Show when=move || show_modules.get()>
                <div class=format!("{} {}", css::chipRow, css::moduleRow)>
                    <For
                        each=move || modules.get()
                        key=|control| (control.module, control.active)
                        children=|control| view! { <ModuleButton control=control /> }
                    />
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn CategoryButton(control: CategoryControl) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let key = control.category.key();

    view! {
        <button
            class=chip_class(control.active)
            data-category=key
            aria-pressed=control.active.to_string()
            on:click=move |_| ctx.select_category(key)
        >
            <span class=css::chipIcon>{control.category.icon()}</span>
            {control.category.label()}
        </button>
    }
}

#[component]
fn ModuleButton(control: ModuleControl) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let key = control.module.key();

    view! {
        <button
            class=format!("{} {}", chip_class(control.active), css::chipSmall)
            data-module=key
            aria-pressed=control.active.to_string()
            on:click=move |_| ctx.select_module(key)
        >
            <span class=css::chipIcon>{control.module.icon()}</span>
            {control.module.label()}
        </button>
    }
}

fn chip_class(active: bool) -> String {
    if active {
        format!("{} {}", css::chip, css::chipActive)
    } else {
        css::chip.to_string()
    }
}
