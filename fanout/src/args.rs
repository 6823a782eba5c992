//! 事件参数列表（EventArgs）
//!
//! 以定长、显式类型的位置参数列表承载一次分发携带的数据，
//! 所有作用域的监听器共享同一份签名与同一份参数（按引用转发，不复制）。
//!
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 位置参数列表：有序的 `serde_json::Value` 序列
///
/// # 示例
///
/// ```
/// use fanout::args::EventArgs;
/// use serde_json::json;
///
/// let args = EventArgs::from(vec![json!("volume"), json!(0.8)]);
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.get(0), Some(&json!("volume")));
/// assert_eq!(args.get(2), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventArgs(Vec<Value>);

impl EventArgs {
    /// 创建空参数列表
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 按位置取参数
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// 参数个数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 按序迭代参数
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// 以切片视图访问全部参数
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for EventArgs {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for EventArgs {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
