//! 统一错误定义
//!
//! 聚焦重命名表解码、合并分发与监听器失败传播的最小必要集合，
//! 便于在调用侧统一以 `FanoutError` 处理。
//!
use thiserror::Error;

/// 统一错误类型（最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FanoutError {
    /// 序列化/反序列化失败（如从 JSON 加载重命名表）
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    /// 名义键不在合并结果的键集合中（仅严格入口 `emit` 会返回）
    #[error("merged key not found: {0}")]
    KeyNotFound(String),

    /// 监听器执行失败：记录名义键与失败作用域的序号，
    /// 原始错误原样保留在 source 链上，不做转换
    #[error("listener failed: key={key}, scope={scope}")]
    Listener {
        key: String,
        scope: usize,
        #[source]
        source: anyhow::Error,
    },
}

/// 统一 Result 类型别名
pub type FanoutResult<T> = Result<T, FanoutError>;
