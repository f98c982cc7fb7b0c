//! Login / registration dialog.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, AuthTab};
use crate::components::icons as ic;
use crate::models::{NotificationLevel, Notifier, RegistrationForm};

stylance::import_crate_style!(css, "src/components/auth.module.css");

#[component]
pub fn AuthDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let tab = ctx.auth_dialog;

    let close = move |_: leptos::ev::MouseEvent| tab.set(None);

    view! {
        <Show when=move || tab.get().is_some()>
            <div class=css::backdrop on:click=close>
                <div class=css::dialog role="dialog" on:click=|ev| ev.stop_propagation()>
                    <header class=css::dialogHeader>
                        <div class=css::tabs>
                            <button
                                class=move || tab_class(tab.get() == Some(AuthTab::Login))
                                on:click=move |_| tab.set(Some(AuthTab::Login))
                            >
                                "登录"
                            </button>
                            <button
                                class=move || tab_class(tab.get() == Some(AuthTab::Register))
                                on:click=move |_| tab.set(Some(AuthTab::Register))
                            >
                                "注册"
                            </button>
                        </div>
                        <button class=css::closeButton title="关闭" on:click=close>
                            <Icon icon=ic::CLOSE />
                        </button>
                    </header>

                    {move || match tab.get() {
                        Some(AuthTab::Register) => view! { <RegisterForm /> }.into_any(),
                        _ => view! { <LoginForm /> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}

fn tab_class(active: bool) -> String {
    if active {
        format!("{} {}", css::tab, css::tabActive)
    } else {
        css::tab.to_string()
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = ctx.login(&username.get_untracked(), &password.get_untracked());
        if let Err(err) = result {
            ctx.notify(&err.to_string(), NotificationLevel::Error);
            password.set(String::new());
        }
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <label class=css::field>
                <span>"用户名"</span>
                <input
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class=css::field>
                <span>"密码"</span>
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button class=css::submit type="submit">"登录"</button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let form = RwSignal::new(RegistrationForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = form.get_untracked();
        if let Err(err) = ctx.register(&input) {
            ctx.notify(&err.to_string(), NotificationLevel::Error);
        }
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <label class=css::field>
                <span>"用户名"</span>
                <input
                    type="text"
                    autocomplete="username"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
            </label>
            <label class=css::field>
                <span>"邮箱"</span>
                <input
                    type="email"
                    autocomplete="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <label class=css::field>
                <span>"密码"</span>
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
            </label>
            <label class=css::field>
                <span>"确认密码"</span>
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.confirm_password.clone())
                    on:input=move |ev| {
                        form.update(|f| f.confirm_password = event_target_value(&ev))
                    }
                />
            </label>
            <button class=css::submit type="submit">"注册"</button>
        </form>
    }
}
