//! Detail view for a single item (`?item=<id>`).

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::taxonomy::{Category, Module, category_for_module};
use crate::utils::dom;
use crate::utils::format::{format_count, format_item_date};

stylance::import_crate_style!(css, "src/components/details.module.css");

#[component]
pub fn ItemDetails(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let item = ctx
        .items
        .with_untracked(|items| items.iter().find(|item| item.id == id).cloned());

    // Leave through history when possible so the catalog keeps its filters.
    let on_back = move |ev: leptos::ev::MouseEvent| {
        if let Some(history) = dom::window().and_then(|w| w.history().ok())
            && history.length().unwrap_or(0) > 1
        {
            ev.prevent_default();
            let _ = history.back();
        }
    };

    let back_link = view! {
        <a class=css::back href=dom::pathname() on:click=on_back>
            <Icon icon=ic::BACK />
            <span>"返回模组列表"</span>
        </a>
    };

    let Some(item) = item else {
        log::warn!("item '{}' not found", id);
        return view! {
            <div class=css::details>
                {back_link}
                <div class=css::missing>
                    <Icon icon=ic::EMPTY />
                    <p>"未找到该模组，可能已被移除。"</p>
                </div>
            </div>
        }
        .into_any();
    };

    let category_label = Category::parse(&item.category)
        .map(|c| format!("{} {}", c.icon(), c.label()))
        .unwrap_or_else(|| item.category.clone());
    let module = Module::parse(&item.module);
    let module_label = module
        .map(|m| format!("{} {}", m.icon(), m.label()))
        .unwrap_or_else(|| item.module.clone());
    // Records whose module belongs to another category still show it.
    let module_owner = module.and_then(category_for_module);

    let gallery = item.gallery();
    let has_thumbs = gallery.len() > 1;
    let features = item.features.clone();
    let has_features = !features.is_empty();
    let (active_image, set_active_image) = signal(0usize);
    let main_image = {
        let gallery = gallery.clone();
        move || gallery.get(active_image.get()).cloned().unwrap_or_default()
    };
    let created = item
        .created_at
        .as_deref()
        .map(format_item_date)
        .unwrap_or_else(|| "未知".to_string());
    let downloads = item
        .downloads
        .map(format_count)
        .unwrap_or_else(|| "0".to_string());

    view! {
        <div class=css::details>
            {back_link}

            <div class=css::layout>
                <div class=css::gallery>
                    <img class=css::mainImage src=main_image alt=item.name.clone() />
                    <Show when=move || has_thumbs>
                        <div class=css::thumbs>
                            {gallery
                                .iter()
                                .enumerate()
                                .map(|(idx, src)| {
                                    view! {
                                        <button
                                            class=move || {
                                                if active_image.get() == idx {
                                                    format!("{} {}", css::thumb, css::thumbActive)
                                                } else {
                                                    css::thumb.to_string()
                                                }
                                            }
                                            on:click=move |_| set_active_image.set(idx)
                                        >
                                            <img src=src.clone() alt="" loading="lazy" />
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>

                <div class=css::info>
                    <h1 class=css::title>{item.name.clone()}</h1>
                    <p class=css::description>{item.description.clone()}</p>

                    <dl class=css::meta>
                        <dt>"分类"</dt>
                        <dd>{category_label}</dd>
                        <dt>"模块"</dt>
                        <dd>
                            {module_label}
                            {module_owner
                                .filter(|owner| Category::parse(&item.category) != Some(*owner))
                                .map(|owner| view! {
                                    <span class=css::hint>{format!("（属于{}）", owner.label())}</span>
                                })}
                        </dd>
                        <dt><Icon icon=ic::VERSION />" 版本"</dt>
                        <dd>{item.version_or_default().to_string()}</dd>
                        <dt><Icon icon=ic::SIZE />" 大小"</dt>
                        <dd>{item.size_or_default().to_string()}</dd>
                        <dt><Icon icon=ic::CALENDAR />" 发布日期"</dt>
                        <dd>{created}</dd>
                        <dt><Icon icon=ic::DOWNLOAD />" 下载次数"</dt>
                        <dd>{downloads}</dd>
                    </dl>

                    <Show when=move || has_features>
                        <h2 class=css::sectionTitle>"功能特性"</h2>
                        <ul class=css::features>
                            {features
                                .iter()
                                .map(|feature| view! { <li>{feature.clone()}</li> })
                                .collect_view()}
                        </ul>
                    </Show>
                </div>
            </div>
        </div>
    }
    .into_any()
}
