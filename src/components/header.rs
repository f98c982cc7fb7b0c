//! Page header with title and account controls.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, AuthTab};
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/layout.module.css");

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <header class=css::header>
            <a class=css::brand href=dom::pathname()>
                <span class=css::brandIcon><Icon icon=ic::GRID /></span>
                <span class=css::brandText>
                    <span class=css::title>{APP_NAME}</span>
                    <span class=css::tagline>{APP_TAGLINE}</span>
                </span>
            </a>

            <div class=css::account>
                {move || match ctx.account.get() {
                    Some(account) => view! {
                        <span class=css::avatar title=account.email.clone()>
                            {account.avatar_letter()}
                        </span>
                        <span class=css::username>{account.username.clone()}</span>
                        <Show when=move || ctx.account.with(|a| a.as_ref().is_some_and(|a| a.is_admin()))>
                            <span class=css::badge title="管理员">
                                <Icon icon=ic::ADMIN />
                            </span>
                        </Show>
                        <button
                            class=css::headerButton
                            title="登出"
                            on:click=move |_| ctx.logout()
                        >
                            <Icon icon=ic::LOGOUT />
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <button
                            class=css::headerButton
                            on:click=move |_| ctx.auth_dialog.set(Some(AuthTab::Login))
                        >
                            <Icon icon=ic::USER />
                            <span>"登录"</span>
                        </button>
                        <button
                            class=css::headerButtonPrimary
                            on:click=move |_| ctx.auth_dialog.set(Some(AuthTab::Register))
                        >
                            "注册"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}
