//! 合并分发器（MergedDispatcher）
//!
//! 将有序的一组作用域合并为一个分发器：
//! - 名义键集合 = 各作用域自有键的去重并集，在合并时固定；
//! - 分发时先经重命名表解析实际键，再按作用域顺序逐个查找并调用；
//! - 键缺失的作用域静默跳过；首个监听器失败即中止剩余扇出并向上传播；
//! - 监听器查找发生在调用时（晚绑定），合并后对作用域的变更即时生效。
//!
use crate::args::EventArgs;
use crate::error::{FanoutError, FanoutResult};
use crate::rename::RenameTable;
use crate::scope::Scope;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// 合并多个作用域为一个分发器
///
/// `scopes` 的顺序即分发时的调用顺序；`rename_table` 缺省为全恒等。
pub fn merge(scopes: Vec<Arc<dyn Scope>>, rename_table: Option<RenameTable>) -> MergedDispatcher {
    let mut keys: HashSet<String> = HashSet::new();
    for scope in &scopes {
        keys.extend(scope.keys());
    }

    debug!(scopes = scopes.len(), keys = keys.len(), "merged listener scopes");

    MergedDispatcher {
        scopes,
        rename_table: rename_table.unwrap_or_default(),
        keys,
    }
}

/// 名义键 → 扇出调用 的合并结果
///
/// 仅持有作用域的 `Arc` 引用与重命名表，不复制任何监听器。
pub struct MergedDispatcher {
    scopes: Vec<Arc<dyn Scope>>,
    rename_table: RenameTable,
    // 名义键并集，合并时固定；重命名不增删其中的键
    keys: HashSet<String>,
}

impl MergedDispatcher {
    /// 名义键集合（迭代顺序无语义）
    pub fn keys(&self) -> Vec<&str> {
        self.keys.iter().map(String::as_str).collect()
    }

    /// 指定名义键是否在合并结果中
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// 名义键数量
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// 合并结果是否为空
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// 按名义键取扇出句柄；键不在并集中返回 `None`
    pub fn get(&self, key: &str) -> Option<MergedHandler<'_>> {
        self.keys.get(key).map(|nominal| MergedHandler {
            dispatcher: self,
            nominal: nominal.as_str(),
        })
    }

    /// 严格分发：名义键不存在时返回 [`FanoutError::KeyNotFound`]
    pub async fn emit(&self, key: &str, args: &EventArgs) -> FanoutResult<()> {
        if !self.keys.contains(key) {
            return Err(FanoutError::KeyNotFound(key.to_string()));
        }
        self.fan_out(key, args).await
    }

    /// 能力式分发：名义键不存在时返回 `Ok(false)`，完成扇出返回 `Ok(true)`
    pub async fn try_emit(&self, key: &str, args: &EventArgs) -> FanoutResult<bool> {
        if !self.keys.contains(key) {
            return Ok(false);
        }
        self.fan_out(key, args).await?;
        Ok(true)
    }

    async fn fan_out(&self, nominal: &str, args: &EventArgs) -> FanoutResult<()> {
        let actual = self.rename_table.resolve(nominal);

        for (idx, scope) in self.scopes.iter().enumerate() {
            // 调用时查找（晚绑定）；键缺失的作用域静默跳过
            let Some(listener) = scope.listener(actual) else {
                trace!(key = nominal, actual, scope = idx, "no listener in scope, skipped");
                continue;
            };

            listener
                .call(args)
                .await
                .map_err(|source| FanoutError::Listener {
                    key: nominal.to_string(),
                    scope: idx,
                    source,
                })?;
        }

        Ok(())
    }
}

/// 单个名义键的扇出句柄
///
/// 经 [`MergedDispatcher::get`] 的判空查找取得，调用本身不会因
/// 某个作用域缺失（重命名后的）键而失败。
pub struct MergedHandler<'a> {
    dispatcher: &'a MergedDispatcher,
    nominal: &'a str,
}

impl MergedHandler<'_> {
    /// 句柄对应的名义键
    pub fn key(&self) -> &str {
        self.nominal
    }

    /// 执行一次扇出
    pub async fn call(&self, args: &EventArgs) -> FanoutResult<()> {
        self.dispatcher.fan_out(self.nominal, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope_inmemory::InMemoryScope;
    use std::sync::Mutex;

    type Log = Arc<Mutex<Vec<String>>>;

    fn logging_scope(log: &Log, tag: &'static str, keys: &[&str]) -> Arc<InMemoryScope> {
        let scope = InMemoryScope::new();
        for key in keys {
            let log = log.clone();
            let entry = format!("{tag}:{key}");
            scope.register_fn(*key, move |_| {
                log.lock().unwrap().push(entry.clone());
                Ok(())
            });
        }
        Arc::new(scope)
    }

    #[test]
    fn keys_are_union_of_scope_keys() {
        let log: Log = Log::default();
        let s1 = logging_scope(&log, "s1", &["open", "close"]);
        let s2 = logging_scope(&log, "s2", &["close", "submit"]);

        let merged = merge(vec![s1, s2], None);

        let mut keys = merged.keys();
        keys.sort_unstable();
        assert_eq!(keys, vec!["close", "open", "submit"]);
        assert_eq!(merged.len(), 3);
        assert!(merged.contains_key("close"));
        assert!(!merged.contains_key("input"));
    }

    #[test]
    fn empty_scope_list_yields_empty_dispatcher() {
        let merged = merge(Vec::new(), None);
        assert!(merged.is_empty());
        assert!(merged.get("open").is_none());
    }

    #[tokio::test]
    async fn fan_out_follows_scope_sequence_order() {
        let log: Log = Log::default();
        let s1 = logging_scope(&log, "s1", &["ping"]);
        let s2 = logging_scope(&log, "s2", &["ping"]);
        let s3 = logging_scope(&log, "s3", &["ping"]);

        let merged = merge(vec![s1, s2, s3], None);
        merged.emit("ping", &EventArgs::new()).await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["s1:ping", "s2:ping", "s3:ping"]
        );
    }

    #[tokio::test]
    async fn scope_without_key_is_skipped_silently() {
        let log: Log = Log::default();
        let s1 = logging_scope(&log, "s1", &["open"]);
        let s2 = logging_scope(&log, "s2", &["close"]);

        let merged = merge(vec![s1, s2], None);
        merged.emit("open", &EventArgs::new()).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["s1:open"]);
    }

    #[tokio::test]
    async fn rename_probes_actual_key_in_every_scope() {
        let log: Log = Log::default();
        let s1 = logging_scope(&log, "s1", &["change"]);
        let s2 = logging_scope(&log, "s2", &["input"]);
        let table = RenameTable::new().with("change", "input");

        let merged = merge(vec![s1, s2], Some(table));

        // 名义键并集不受重命名影响
        let mut keys = merged.keys();
        keys.sort_unstable();
        assert_eq!(keys, vec!["change", "input"]);

        // change 解析到 input：s1 没有 input，只有 s2 被调用
        merged.emit("change", &EventArgs::new()).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["s2:input"]);

        // input 未登记重命名，恒等解析，仍命中 s2
        log.lock().unwrap().clear();
        merged.emit("input", &EventArgs::new()).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["s2:input"]);
    }

    #[tokio::test]
    async fn rename_does_not_add_nominal_keys() {
        let log: Log = Log::default();
        let s1 = logging_scope(&log, "s1", &["input"]);
        let table = RenameTable::new().with("change", "input");

        let merged = merge(vec![s1], Some(table));

        // change 不是任何作用域的自有键，不进入并集
        assert!(merged.get("change").is_none());
        assert!(!merged.try_emit("change", &EventArgs::new()).await.unwrap());
        assert!(merged.contains_key("input"));
    }

    #[tokio::test]
    async fn lookup_is_late_bound() {
        let log: Log = Log::default();
        let s1 = logging_scope(&log, "s1", &["ping"]);
        let s2 = Arc::new(InMemoryScope::new());

        let merged = merge(vec![s1.clone(), s2.clone()], None);

        // 合并后再注册：分发时即可被观察到
        {
            let log = log.clone();
            s2.register_fn("ping", move |_| {
                log.lock().unwrap().push("s2:ping".to_string());
                Ok(())
            });
        }
        merged.emit("ping", &EventArgs::new()).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["s1:ping", "s2:ping"]);

        // 合并后注销：键仍在并集中，但该作用域被跳过
        log.lock().unwrap().clear();
        s1.deregister("ping");
        merged.emit("ping", &EventArgs::new()).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["s2:ping"]);
        assert!(merged.contains_key("ping"));
    }

    #[tokio::test]
    async fn first_listener_error_aborts_remaining_fan_out() {
        let log: Log = Log::default();
        let s1 = logging_scope(&log, "s1", &["save"]);
        let s2 = Arc::new(InMemoryScope::new());
        s2.register_fn("save", |_| Err(anyhow::anyhow!("disk full")));
        let s3 = logging_scope(&log, "s3", &["save"]);

        let merged = merge(vec![s1, s2, s3], None);
        let err = merged.emit("save", &EventArgs::new()).await.unwrap_err();

        match err {
            FanoutError::Listener { key, scope, source } => {
                assert_eq!(key, "save");
                assert_eq!(scope, 1);
                assert_eq!(source.to_string(), "disk full");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // s1 的副作用保留，s3 未被调用
        assert_eq!(*log.lock().unwrap(), vec!["s1:save"]);
    }

    #[tokio::test]
    async fn strict_emit_rejects_unknown_key() {
        let log: Log = Log::default();
        let s1 = logging_scope(&log, "s1", &["open"]);
        let merged = merge(vec![s1], None);

        let err = merged.emit("close", &EventArgs::new()).await.unwrap_err();
        match err {
            FanoutError::KeyNotFound(key) => assert_eq!(key, "close"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!merged.try_emit("close", &EventArgs::new()).await.unwrap());
    }

    #[tokio::test]
    async fn handler_from_get_carries_its_key() {
        let log: Log = Log::default();
        let s1 = logging_scope(&log, "s1", &["open"]);
        let merged = merge(vec![s1], None);

        let handler = merged.get("open").unwrap();
        assert_eq!(handler.key(), "open");
        handler.call(&EventArgs::new()).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["s1:open"]);
    }
}
