//! 数值夹取（clamp）
//!
//! 将数值限制到闭区间，固定按 “先 max 后 min” 两步合成：
//! `value.max(min).min(max)`。该合成顺序是对外契约的一部分：
//! - 区间倒置（`min > max`）时结果遵循两步合成，而非 “校验过的区间夹取”，
//!   例如 `clamp(2.0, 5.0, 1.0) == 1.0`；
//! - NaN 遵循 `f64::max`/`f64::min` 的 IEEE maxNum/minNum 语义：
//!   任一侧为 NaN 时返回另一侧，因此 `clamp(f64::NAN, 0.0, 1.0) == 0.0`。
//!
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 将 `value` 夹取到 `[min, max]`，按 `value.max(min).min(max)` 合成
///
/// # 示例
///
/// ```
/// use fanout::bounds::clamp;
///
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
///
/// // 区间倒置时忠实复现两步合成
/// assert_eq!(clamp(2.0, 5.0, 1.0), 1.0);
/// ```
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// 以缺省区间 `[0, 1]` 夹取
///
/// # 示例
///
/// ```
/// use fanout::bounds::clamp_unit;
///
/// assert_eq!(clamp_unit(0.5), 0.5);
/// assert_eq!(clamp_unit(-0.1), 0.0);
/// assert_eq!(clamp_unit(1.7), 1.0);
/// ```
pub fn clamp_unit(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// 夹取区间（值对象）
///
/// 构造不做 `min <= max` 校验：倒置区间是合法输入，
/// 其行为由两步合成决定并被测试钉死。
///
/// # 示例
///
/// ```
/// use fanout::bounds::Bounds;
///
/// let unit = Bounds::builder().build();
/// assert_eq!(unit, Bounds::UNIT);
/// assert_eq!(unit.clamp(1.7), 1.0);
///
/// let volume = Bounds::builder().max(11.0).build();
/// assert_eq!(volume.clamp(12.0), 11.0);
/// assert_eq!(volume.clamp(-3.0), 0.0);
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// 下界，缺省 0
    #[builder(default = 0.0)]
    pub min: f64,
    /// 上界，缺省 1
    #[builder(default = 1.0)]
    pub max: f64,
}

impl Bounds {
    /// 缺省区间 `[0, 1]`
    pub const UNIT: Bounds = Bounds { min: 0.0, max: 1.0 };

    /// 按上下界构造
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 将 `value` 夹取到本区间
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.min, self.max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
