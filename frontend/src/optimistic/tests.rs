use super::*;
use futures::executor::block_on;

fn seeded() -> ListState<String> {
    let state = ListState::new();
    let generation = state.begin_load();
    state.finish_load(
        generation,
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
    );
    state
}

#[test]
fn load_cycle_clears_loading_flag() {
    let state: ListState<String> = ListState::new();
    assert!(state.loading.get_untracked());

    let generation = state.begin_load();
    assert!(state.loading.get_untracked());
    assert!(state.finish_load(generation, vec!["a".into()]));
    assert!(!state.loading.get_untracked());
    assert_eq!(state.items.get_untracked(), vec!["a".to_string()]);
}

#[test]
fn failed_delete_restores_row_in_original_position() {
    let state = seeded();

    let result: Result<(), &str> = block_on(state.mutate(
        |items| items.retain(|s| s != "b"),
        async { Err("server responded 500") },
    ));

    assert_eq!(result, Err("server responded 500"));
    // 回滚属性：行回到原位置、原内容
    assert_eq!(
        state.items.get_untracked(),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

#[test]
fn successful_delete_commits_the_removal() {
    let state = seeded();

    let result: Result<(), &str> =
        block_on(state.mutate(|items| items.retain(|s| s != "b"), async { Ok(()) }));

    assert!(result.is_ok());
    assert_eq!(
        state.items.get_untracked(),
        vec!["a".to_string(), "c".to_string()]
    );
}

#[test]
fn stale_refetch_cannot_resurrect_a_deleted_row() {
    let state = seeded();

    // 后台刷新先起跑，拿到了删除前的代数
    let stale_generation = state.begin_load();
    state.finish_load(stale_generation, state.items.get_untracked());

    // 随后删除提交成功
    let result: Result<(), &str> =
        block_on(state.mutate(|items| items.retain(|s| s != "b"), async { Ok(()) }));
    assert!(result.is_ok());

    // 删除前启动的另一次刷新这时才返回——必须被丢弃
    let resurrection = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert!(!state.finish_load(stale_generation, resurrection));
    assert_eq!(
        state.items.get_untracked(),
        vec!["a".to_string(), "c".to_string()]
    );
}

#[test]
fn newer_load_supersedes_older_inflight_load() {
    let state: ListState<String> = ListState::new();

    let first = state.begin_load();
    let second = state.begin_load();

    // 旧响应后到：丢弃
    assert!(state.finish_load(second, vec!["new".into()]));
    assert!(!state.finish_load(first, vec!["old".into()]));
    assert_eq!(state.items.get_untracked(), vec!["new".to_string()]);
}

#[test]
fn failed_edit_restores_fields() {
    let state = seeded();

    let result: Result<(), &str> = block_on(state.mutate(
        |items| {
            if let Some(item) = items.iter_mut().find(|s| *s == "b") {
                *item = "B-edited".to_string();
            }
        },
        async { Err("failed to update") },
    ));

    assert!(result.is_err());
    assert_eq!(
        state.items.get_untracked(),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

#[test]
fn fail_load_from_stale_generation_keeps_loading_state() {
    let state: ListState<String> = ListState::new();
    let first = state.begin_load();
    let _second = state.begin_load();

    // 旧拉取失败不应干扰新拉取的加载态
    state.fail_load(first);
    assert!(state.loading.get_untracked());
}
