//! 定时器封装
//!
//! 封装 `setInterval`。`Interval` 被 drop 时自动清除定时器，
//! 因此把它挂在组件 owner 上即可随组件卸载一起停止。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// 周期性定时器
pub struct Interval {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn Fn()>,
}

impl Interval {
    /// 创建周期性定时器，每 `millis` 毫秒触发一次回调
    pub fn new<F>(millis: u32, callback: F) -> Option<Self>
    where
        F: Fn() + 'static,
    {
        let closure = Closure::new(callback);
        let window = web_sys::window()?;

        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .ok()?;

        Some(Self { handle, closure })
    }

    /// 取消定时器（drop 时自动调用）
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}
