//! 乐观列表变更 - 各"列表+变更"页面共用的核心例程
//!
//! 每个页面独享一份 `ListState`：条目、加载标志、代数计数器。
//! 变更流程统一为：快照 → 本地立即应用 → 发起 HTTP 调用 →
//! 失败则恢复快照。代数计数器为每次拉取盖章，过期的响应直接丢弃，
//! 这同时保证了删除成功后迟到的后台拉取不会让已删行"复活"。

use leptos::prelude::*;

/// 页面本地的集合状态
pub struct ListState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    generation: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T: Clone + Send + Sync + 'static> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> ListState<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            generation: RwSignal::new(0),
        }
    }

    /// 开始一次拉取：置加载态并返回本次拉取的代数
    pub fn begin_load(&self) -> u64 {
        self.loading.set(true);
        self.generation.update(|g| *g += 1);
        self.generation.get_untracked()
    }

    /// 应用拉取结果。仅当代数仍是当前代时生效；
    /// 过期响应返回 false 并被丢弃。组件卸载后（信号已随 owner
    /// 销毁）迟到的响应同样被丢弃。
    pub fn finish_load(&self, generation: u64, items: Vec<T>) -> bool {
        let Some(current) = self.generation.try_get_untracked() else {
            return false;
        };
        if current != generation {
            return false;
        }
        let _ = self.items.try_set(items);
        let _ = self.loading.try_set(false);
        true
    }

    /// 拉取失败：退出加载态（条目保持原样，由调用方决定提示）
    pub fn fail_load(&self, generation: u64) {
        if self.generation.try_get_untracked() == Some(generation) {
            let _ = self.loading.try_set(false);
        }
    }

    /// 使所有在途拉取过期（本地变更后调用）
    pub fn invalidate(&self) {
        self.generation.update(|g| *g += 1);
    }

    /// 乐观变更：
    /// 1. 抓取当前条目快照
    /// 2. 使在途拉取过期（防止旧响应覆盖本次变更）
    /// 3. 立即应用本地变更
    /// 4. 等待提交调用；失败则恢复快照并把错误交回调用方
    pub async fn mutate<F, Fut, E>(&self, apply: F, commit: Fut) -> Result<(), E>
    where
        F: FnOnce(&mut Vec<T>),
        Fut: Future<Output = Result<(), E>>,
    {
        let snapshot = self.items.get_untracked();
        self.invalidate();
        self.items.update(apply);

        match commit.await {
            Ok(()) => Ok(()),
            Err(e) => {
                let _ = self.items.try_set(snapshot);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests;
