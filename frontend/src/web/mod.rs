//! 原生 Web API 封装模块
//!
//! 对浏览器原生 API 的轻量级封装（web_sys 直用，不经过 gloo-* 系列），
//! 加上路由层：`route` 是纯领域模型，`router` 是基于 History API 的引擎。

pub mod route;
pub mod router;
mod storage;
mod timer;

pub use storage::LocalStorage;
pub use timer::Interval;
