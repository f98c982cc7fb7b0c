//! Result grid and item cards.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::CatalogView;
use crate::core::view::empty_message;
use crate::models::Item;
use crate::utils::format::format_count;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

#[component]
pub fn ItemGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let items = Memo::new(move |_| ctx.view.with(|view| view.items.clone()));
    let is_empty = Memo::new(move |_| ctx.view.with(CatalogView::is_empty));
    let empty_text = Memo::new(move |_| ctx.selection.with(empty_message));

    view! {
        <Show
            when=move || !is_empty.get()
            fallback=move || view! {
                <div class=css::empty>
                    <span class=css::emptyIcon><Icon icon=ic::EMPTY /></span>
                    <p>{move || empty_text.get()}</p>
                    <p class=css::emptyHint>"请尝试其他分类或模块。"</p>
                </div>
            }
        >
            <div class=css::grid>
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=|item| view! { <ItemCard item=item /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn ItemCard(item: Item) -> impl IntoView {
    let href = item.detail_href();
    let downloads = item.downloads.map(format_count);

    view! {
        <article class=css::card data-category=item.category.clone() data-module=item.module.clone()>
            <a class=css::cardImage href=href.clone()>
                <img src=item.image_or_default().to_string() alt=item.name.clone() loading="lazy" />
                <span class=css::cardCategory>{item.category.clone()}</span>
            </a>
            <div class=css::cardBody>
                <h3 class=css::cardTitle>
                    <a href=href.clone()>{item.name.clone()}</a>
                </h3>
                <p class=css::cardDescription>{item.description.clone()}</p>
                <div class=css::cardMeta>
                    <span title="版本">
                        <Icon icon=ic::VERSION />
                        {item.version_or_default().to_string()}
                    </span>
                    <span title="大小">
                        <Icon icon=ic::SIZE />
                        {item.size_or_default().to_string()}
                    </span>
                    {downloads.map(|count| view! {
                        <span title="下载次数">
                            <Icon icon=ic::DOWNLOAD />
                            {count}
                        </span>
                    })}
                </div>
                <a class=css::cardAction href=href>"查看详情"</a>
            </div>
        </article>
    }
}
