//! 登录页
//!
//! 密码规则在客户端先校验，不过关的提交不发网络请求。
//! 登录成功后不在这里导航：路由层的会话监听会把用户送回
//! 被弹回登录前想去的页面（或首页）。

use artify_shared::validate_password;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{login, login_with_provider, use_session};
use crate::components::icons::{Eye, EyeOff, Lock, Mail, ShieldCheck};
use crate::components::toast::use_notify;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_pass, set_show_pass) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        if let Err(e) = validate_password(&password.get_untracked()) {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_busy.set(true);
        spawn_local(async move {
            match login(&session, &email.get_untracked(), &password.get_untracked()).await {
                Ok(_) => notify.success("Login Successful! Welcome back to Artify."),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_busy.set(false);
        });
    };

    let on_provider = move |_| {
        set_busy.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match login_with_provider(&session).await {
                Ok(_) => notify.success("Logged in with Google!"),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="min-h-[70vh] grid place-items-center px-4 py-16 bg-base-200">
            <div class="w-full max-w-md rounded-2xl border bg-base-100 text-base-content shadow-lg border-primary/20">
                <div class="p-6 sm:p-8">
                    <div class="mb-6 flex flex-col items-center gap-2 text-center">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-extrabold">"Welcome Back"</h1>
                        <p class="opacity-70">"Log in to manage your gallery and favorites."</p>
                    </div>

                    <form on:submit=on_submit class="grid gap-4">
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <label class="block text-sm font-semibold" for="login_email">
                            "Email"
                        </label>
                        <div class="relative">
                            <span class="pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 opacity-70">
                                <Mail attr:class="h-4 w-4" />
                            </span>
                            <input
                                id="login_email"
                                type="email"
                                placeholder="you@example.com"
                                class="input input-bordered w-full pl-10"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                disabled=move || busy.get()
                                required
                            />
                        </div>

                        <label class="block text-sm font-semibold mt-2" for="login_password">
                            "Password"
                        </label>
                        <div class="relative">
                            <span class="pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 opacity-70">
                                <Lock attr:class="h-4 w-4" />
                            </span>
                            <input
                                id="login_password"
                                type=move || if show_pass.get() { "text" } else { "password" }
                                placeholder="••••••••"
                                class="input input-bordered w-full pl-10 pr-10"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                disabled=move || busy.get()
                                required
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-1/2 -translate-y-1/2 opacity-80 hover:opacity-100"
                                on:click=move |_| set_show_pass.update(|s| *s = !*s)
                            >
                                <Show
                                    when=move || show_pass.get()
                                    fallback=|| view! { <Eye attr:class="h-4 w-4" /> }
                                >
                                    <EyeOff attr:class="h-4 w-4" />
                                </Show>
                            </button>
                        </div>

                        <button class="btn btn-primary w-full mt-2" disabled=move || busy.get()>
                            {move || {
                                if busy.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Logging in…"
                                    }
                                        .into_any()
                                } else {
                                    "Login".into_any()
                                }
                            }}
                        </button>
                    </form>

                    <div class="my-6 flex items-center gap-4">
                        <div class="h-px flex-1 bg-base-content/20"></div>
                        <span class="text-sm opacity-70">"Or with"</span>
                        <div class="h-px flex-1 bg-base-content/20"></div>
                    </div>

                    <button
                        type="button"
                        class="btn w-full btn-outline border-primary text-primary"
                        disabled=move || busy.get()
                        on:click=on_provider
                    >
                        "Continue with Google"
                    </button>

                    <p class="mt-6 text-center text-sm">
                        "New to Artify? "
                        <Link to=AppRoute::Register class="font-semibold text-primary">
                            "Create an account"
                        </Link>
                    </p>
                </div>
            </div>
        </div>
    }
}
