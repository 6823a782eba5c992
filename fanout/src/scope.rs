//! 监听作用域（Scope）协议
//!
//! 一个作用域是一组 “事件键 → 监听器” 的只读视图：
//! - `keys`：自有键快照，仅在合并时用于计算名义键并集；
//! - `listener`：按键查找，在每次分发时解析（晚绑定），
//!   合并后对作用域的变更在调用时即可被观察到。
//!
//! 本模块仅定义协议，不绑定具体存储；内存实现见
//! [`scope_inmemory`](crate::scope_inmemory)。
//!
use crate::listener::Listener;
use std::sync::Arc;

/// 监听作用域：按字符串键提供监听器
pub trait Scope: Send + Sync {
    /// 当前自有键集合的快照
    fn keys(&self) -> Vec<String>;

    /// 按实际键查找监听器；键缺失返回 `None`（调用方静默跳过）
    fn listener(&self, key: &str) -> Option<Arc<dyn Listener>>;
}
