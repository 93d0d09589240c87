//! LocalStorage 封装
//!
//! 浏览器存储里只放两样东西：主题偏好和身份提供方签发的会话令牌。
//! 用户资料永远不落存储。

/// 本地存储操作封装
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取键值；键不存在或存储不可用时返回 None
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 写入键值，返回是否成功（隐私模式下存储可能不可写）
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除键值对
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
