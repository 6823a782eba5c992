//! 监听器（Listener）
//!
//! 定义消费一次分发的处理协议：所有作用域共享同一份签名，
//! 返回值不携带业务数据，失败以 `anyhow::Error` 原样向调用方传播。
//!
use crate::args::EventArgs;
use async_trait::async_trait;
use std::sync::Arc;

/// 监听器：处理一次按键分发的参数列表
#[async_trait]
pub trait Listener: Send + Sync {
    /// 处理一次分发（fire-and-forget，不返回业务数据）
    async fn call(&self, args: &EventArgs) -> anyhow::Result<()>;
}

struct FnListener<F> {
    f: F,
}

#[async_trait]
impl<F> Listener for FnListener<F>
where
    F: Fn(&EventArgs) -> anyhow::Result<()> + Send + Sync,
{
    async fn call(&self, args: &EventArgs) -> anyhow::Result<()> {
        (self.f)(args)
    }
}

/// 将同步闭包适配为 `Arc<dyn Listener>`
///
/// # 示例
///
/// ```
/// use fanout::listener::listener_fn;
///
/// let l = listener_fn(|args| {
///     assert!(args.is_empty());
///     Ok(())
/// });
/// # let _ = l;
/// ```
pub fn listener_fn<F>(f: F) -> Arc<dyn Listener>
where
    F: Fn(&EventArgs) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(FnListener { f })
}
