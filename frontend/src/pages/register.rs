//! 注册页
//!
//! 姓名/邮箱/密码 + 可选头像文件。校验（密码三条规则逐条报错）
//! 在任何网络调用之前完成；头像先上传图床换 URL，再交提供方建号。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{register, use_session, AuthError};
use crate::components::icons::{ImageIcon, Lock, Mail, UserRound};
use crate::components::toast::use_notify;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let avatar = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        set_busy.set(true);
        spawn_local(async move {
            let result = register(
                &session,
                &name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
                avatar,
            )
            .await;
            match result {
                Ok(_) => notify.success("Account Created! Welcome to Artify."),
                // 校验错误与提供方错误都展示在表单里
                Err(AuthError::Validation(e)) => set_error_msg.set(Some(e.to_string())),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="min-h-[70vh] grid place-items-center px-4 py-16 bg-base-200">
            <div class="w-full max-w-md rounded-2xl border bg-base-100 text-base-content shadow-lg border-primary/20">
                <div class="p-6 sm:p-8">
                    <h1 class="text-3xl font-extrabold mb-2">"Create Account"</h1>
                    <p class="opacity-70 mb-6">"Join Artify and start sharing your creativity."</p>

                    <form on:submit=on_submit class="grid gap-4">
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <label class="block text-sm font-semibold" for="reg_name">
                            "Name"
                        </label>
                        <div class="relative">
                            <span class="pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 opacity-70">
                                <UserRound attr:class="h-4 w-4" />
                            </span>
                            <input
                                id="reg_name"
                                type="text"
                                placeholder="Your name"
                                class="input input-bordered w-full pl-10"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                disabled=move || busy.get()
                                required
                            />
                        </div>

                        <label class="block text-sm font-semibold mt-2" for="reg_email">
                            "Email"
                        </label>
                        <div class="relative">
                            <span class="pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 opacity-70">
                                <Mail attr:class="h-4 w-4" />
                            </span>
                            <input
                                id="reg_email"
                                type="email"
                                placeholder="you@example.com"
                                class="input input-bordered w-full pl-10"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                disabled=move || busy.get()
                                required
                            />
                        </div>

                        <label class="block text-sm font-semibold mt-2" for="reg_password">
                            "Password"
                        </label>
                        <div class="relative">
                            <span class="pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 opacity-70">
                                <Lock attr:class="h-4 w-4" />
                            </span>
                            <input
                                id="reg_password"
                                type="password"
                                placeholder="••••••••"
                                class=move || {
                                    if error_msg.get().is_some() {
                                        "input input-bordered input-error w-full pl-10"
                                    } else {
                                        "input input-bordered w-full pl-10"
                                    }
                                }
                                on:input=move |ev| {
                                    set_password.set(event_target_value(&ev));
                                    set_error_msg.set(None);
                                }
                                prop:value=password
                                disabled=move || busy.get()
                                required
                            />
                        </div>

                        <label class="block text-sm font-semibold mt-2" for="reg_avatar">
                            "Profile Photo (Optional)"
                        </label>
                        <div class="relative">
                            <span class="pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 opacity-70">
                                <ImageIcon attr:class="h-4 w-4" />
                            </span>
                            <input
                                id="reg_avatar"
                                type="file"
                                accept="image/*"
                                class="file-input file-input-bordered w-full pl-10"
                                node_ref=file_input
                                disabled=move || busy.get()
                            />
                        </div>

                        <button class="btn btn-primary w-full mt-2" disabled=move || busy.get()>
                            {move || {
                                if busy.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Creating…"
                                    }
                                        .into_any()
                                } else {
                                    "Create Account".into_any()
                                }
                            }}
                        </button>
                    </form>

                    <p class="mt-6 text-center text-sm">
                        "Already have an account? "
                        <Link to=AppRoute::Login class="font-semibold text-primary">
                            "Login"
                        </Link>
                    </p>
                </div>
            </div>
        </div>
    }
}
