//! 合并分发示例
//! 展示 作用域注册 -> 重命名 -> 合并 -> 扇出 的流程，以及区间夹取
use fanout::{Bounds, EventArgs, InMemoryScope, RenameTable, Scope, clamp_unit, merge};
use serde_json::json;
use std::sync::Arc;

// ============================================================================
// 两个监听作用域：界面层与统计层
// ============================================================================

fn ui_scope() -> Arc<InMemoryScope> {
    let scope = InMemoryScope::new();
    scope.register_fn("input", |args| {
        println!("[ui] input: {:?}", args.get(0));
        Ok(())
    });
    scope.register_fn("submit", |_| {
        println!("[ui] submit");
        Ok(())
    });
    Arc::new(scope)
}

fn stats_scope() -> Arc<InMemoryScope> {
    let scope = InMemoryScope::new();
    scope.register_fn("input", |args| {
        println!("[stats] input seen, {} arg(s)", args.len());
        Ok(())
    });
    Arc::new(scope)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 名义键 change 在各作用域中按实际键 input 查找
    let table = RenameTable::new().with("change", "input");
    let merged = merge(vec![ui_scope() as Arc<dyn Scope>, stats_scope()], Some(table));

    let mut keys = merged.keys();
    keys.sort_unstable();
    println!("merged keys: {keys:?}");

    // 两个作用域按顺序扇出
    let args = EventArgs::from(vec![json!("hello")]);
    merged.emit("change", &args).await?;

    // submit 只有界面层监听
    merged.emit("submit", &EventArgs::new()).await?;

    // 未合并的键走能力式入口
    let invoked = merged.try_emit("blur", &EventArgs::new()).await?;
    println!("blur invoked: {invoked}");

    // ============================================================================
    // 区间夹取
    // ============================================================================

    println!("clamp_unit(1.7) = {}", clamp_unit(1.7));
    let volume = Bounds::builder().max(11.0).build();
    println!("volume {} clamps 12.3 to {}", volume, volume.clamp(12.3));

    Ok(())
}
