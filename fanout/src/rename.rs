//! 键重命名表（RenameTable）
//!
//! 将合并结果上暴露的 “名义键” 映射为在各作用域中实际查找的 “实际键”。
//! 未登记的名义键按恒等回退（实际键即名义键）。重命名只影响分发时
//! 探测哪个键，不增删合并结果的键集合。
//!
use crate::error::FanoutResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// 名义键 → 实际键 的映射，缺省恒等
///
/// # 示例
///
/// ```
/// use fanout::rename::RenameTable;
///
/// let table = RenameTable::new().with("change", "input");
/// assert_eq!(table.resolve("change"), "input");
/// assert_eq!(table.resolve("submit"), "submit");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RenameTable(HashMap<String, String>);

impl RenameTable {
    /// 创建空表（全恒等）
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式登记一条映射
    pub fn with(mut self, nominal: impl Into<String>, actual: impl Into<String>) -> Self {
        self.insert(nominal, actual);
        self
    }

    /// 登记一条映射
    pub fn insert(&mut self, nominal: impl Into<String>, actual: impl Into<String>) {
        self.0.insert(nominal.into(), actual.into());
    }

    /// 解析名义键对应的实际键；未登记时按恒等回退。
    /// 回退以 “是否登记” 为准：显式映射到空串的条目解析为空串。
    pub fn resolve<'a>(&'a self, nominal: &'a str) -> &'a str {
        self.0.get(nominal).map(String::as_str).unwrap_or(nominal)
    }

    /// 已登记的映射条数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 是否为空表
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 从 JSON 对象加载重命名表（配置数据场景）
    pub fn from_json(value: Value) -> FanoutResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl FromIterator<(String, String)> for RenameTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
