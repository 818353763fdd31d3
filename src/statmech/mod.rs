//! # 统计力学计算模块
//!
//! 提供量子本征态配分函数计算功能。
//!
//! ## 子模块
//! - `constants`: CODATA 物理常数参考表
//! - `units`: 能量单位解析
//! - `partition`: 配分函数求值
//!
//! ## 依赖关系
//! - 被 `lib.rs` 重导出
//! - 使用 `error.rs` 的错误类型

pub mod constants;
pub mod partition;
pub mod units;

pub use partition::{discrete_partition_function, harmonic_oscillator_partition_function};
pub use units::{EnergyUnit, UnitConstants};
