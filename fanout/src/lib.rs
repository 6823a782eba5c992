//! 监听作用域合并与数值夹取基础库（fanout）
//!
//! 提供两个相互独立的纯计算构件：
//! - 合并分发（`merge`）：将有序的一组监听作用域（`scope`）合并为一个
//!   按名义键扇出的分发器，支持键重命名（`rename`）、调用时查找（晚绑定）
//!   与首错中止的顺序扇出；
//! - 数值夹取（`bounds`）：按 “先 max 后 min” 两步合成将数值限制到闭区间。
//!
//! 本 crate 不做 I/O、不持有跨调用状态，仅定义协议（`Scope`/`Listener`）、
//! 内存实现（`InMemoryScope`）与最小必要的错误类型，便于在任意调用方
//! 组合使用。
//!
//! 典型用法：
//! 1. 用 `InMemoryScope::register_fn` 构建若干作用域；
//! 2. 可选地准备 `RenameTable`（名义键 → 实际键，缺省恒等）；
//! 3. 调用 `merge` 取得 `MergedDispatcher`，用 `emit`/`try_emit` 或
//!    `get(...).call(...)` 进行扇出分发。
//!
pub mod args;
pub mod bounds;
pub mod error;
pub mod listener;
pub mod merge;
pub mod rename;
pub mod scope;
pub mod scope_inmemory;

pub use args::EventArgs;
pub use bounds::{Bounds, clamp, clamp_unit};
pub use error::{FanoutError, FanoutResult};
pub use listener::{Listener, listener_fn};
pub use merge::{MergedDispatcher, MergedHandler, merge};
pub use rename::RenameTable;
pub use scope::Scope;
pub use scope_inmemory::InMemoryScope;
