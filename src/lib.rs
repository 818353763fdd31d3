//! # Qpartition - 量子本征态配分函数计算库
//!
//! 对一组量子本征态（任意离散能级，或谐振子近似）在给定温度序列上
//! 求取统计力学配分函数，支持四种能量单位制。
//!
//! ## 入口
//! - [`discrete_partition_function`] - 离散能谱求和
//! - [`harmonic_oscillator_partition_function`] - 谐振子闭式解
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── statmech/   (统计力学核心)
//!   │     ├── units.rs     (能量单位解析)
//!   │     ├── partition.rs (配分函数求值)
//!   │     └── constants.rs (CODATA 物理常数)
//!   └── error.rs    (错误处理)
//! ```

pub mod error;
pub mod statmech;

pub use error::{QpartitionError, Result};
pub use statmech::{
    discrete_partition_function, harmonic_oscillator_partition_function, EnergyUnit, UnitConstants,
};
