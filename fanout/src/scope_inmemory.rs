//! 内存版作用域（InMemoryScope）
//!
//! 基于 `DashMap` 的并发注册表实现 `Scope` 协议：
//! - `register`：注册监听器，同键后写覆盖并返回被替换者；
//! - `deregister`：注销并返回原监听器；
//! - 查找在调用时进行，合并之后的注册/注销同样生效。
//!
use crate::args::EventArgs;
use crate::listener::{Listener, listener_fn};
use crate::scope::Scope;
use dashmap::DashMap;
use std::sync::Arc;

/// 简单的内存作用域实现
pub struct InMemoryScope {
    listeners: DashMap<String, Arc<dyn Listener>>,
}

impl Default for InMemoryScope {
    fn default() -> Self {
        Self {
            listeners: DashMap::new(),
        }
    }
}

impl InMemoryScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册监听器；同键重复注册时覆盖，返回被替换的监听器
    pub fn register(
        &self,
        key: impl Into<String>,
        listener: Arc<dyn Listener>,
    ) -> Option<Arc<dyn Listener>> {
        self.listeners.insert(key.into(), listener)
    }

    /// 以同步闭包注册监听器
    pub fn register_fn<F>(&self, key: impl Into<String>, f: F) -> Option<Arc<dyn Listener>>
    where
        F: Fn(&EventArgs) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.register(key, listener_fn(f))
    }

    /// 注销监听器，返回被移除的监听器
    pub fn deregister(&self, key: &str) -> Option<Arc<dyn Listener>> {
        self.listeners.remove(key).map(|(_, listener)| listener)
    }

    /// 是否存在指定键
    pub fn contains_key(&self, key: &str) -> bool {
        self.listeners.contains_key(key)
    }

    /// 已注册的键数量
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// 是否没有任何注册
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Scope for InMemoryScope {
    fn keys(&self) -> Vec<String> {
        self.listeners.iter().map(|e| e.key().clone()).collect()
    }

    fn listener(&self, key: &str) -> Option<Arc<dyn Listener>> {
        self.listeners.get(key).map(|l| l.value().clone())
    }
}
