//! Catalog page: filter controls, toolbar, result grid and pagination.
//!
//! Every part reads the [`CatalogView`](crate::core::CatalogView) memo on
//! [`AppContext`](crate::app::AppContext) and writes through its actions.

mod filters;
mod grid;
mod pagination;
mod toolbar;

use leptos::prelude::*;

use crate::app::AppContext;

pub use filters::FilterBar;
pub use grid::ItemGrid;
pub use pagination::Pagination;
pub use toolbar::Toolbar;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let summary = Memo::new(move |_| ctx.view.with(|view| view.summary.clone()));

    view! {
        <section class=css::catalog>
            <FilterBar />
            <Toolbar />
            <p class=css::summary>{move || summary.get()}</p>
            <ItemGrid />
            <Pagination />
        </section>
    }
}
