//! Toast stack in the corner of the page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Notification, NotificationLevel};

stylance::import_crate_style!(css, "src/components/toast.module.css");

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::stack aria-live="polite">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=|toast| view! { <Toast toast=toast /> }
            />
        </div>
    }
}

#[component]
fn Toast(toast: Notification) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (icon, level_class) = match toast.level {
        NotificationLevel::Success => (ic::SUCCESS, css::success),
        NotificationLevel::Error => (ic::ERROR, css::error),
        NotificationLevel::Info => (ic::INFO, css::info),
    };
    let id = toast.id;

    view! {
        <div class=format!("{} {}", css::toast, level_class) role="status">
            <Icon icon=icon />
            <span class=css::message>{toast.message}</span>
            <button class=css::dismiss title="关闭" on:click=move |_| ctx.dismiss_toast(id)>
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
