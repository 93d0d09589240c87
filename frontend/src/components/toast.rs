//! 全局通知
//!
//! 一条当前通知的信号经 Context 共享；任何页面成功/失败时调用
//! `success`/`error`，`ToastHost` 负责渲染并在 3 秒后自动清除。

use leptos::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub is_error: bool,
}

#[derive(Clone, Copy)]
pub struct NotifyContext {
    current: RwSignal<Option<Notification>>,
}

impl NotifyContext {
    fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.current.set(Some(Notification {
            message: message.into(),
            is_error: false,
        }));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.current.set(Some(Notification {
            message: message.into(),
            is_error: true,
        }));
    }
}

pub fn provide_notify() {
    provide_context(NotifyContext::new());
}

pub fn use_notify() -> NotifyContext {
    use_context::<NotifyContext>().expect("NotifyContext should be provided")
}

/// 通知渲染宿主，App 根部放一个
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_notify();
    let current = ctx.current;

    // 3 秒后清除通知
    Effect::new(move |_| {
        if current.get().is_some() {
            set_timeout(move || current.set(None), Duration::from_secs(3));
        }
    });

    view! {
        <Show when=move || current.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = current.get().map(|n| n.is_error).unwrap_or(false);
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || current.get().map(|n| n.message).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
