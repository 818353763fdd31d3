//! # 物理常数参考表
//!
//! 提供配分函数计算所需的基本物理常数。
//!
//! ## 数据来源
//! CODATA 2018 推荐值 (NIST Reference on Constants, Units, and Uncertainty)
//! https://physics.nist.gov/cuu/Constants/
//!
//! ## 依赖关系
//! - 被 `statmech/units.rs` 调用进行单位换算
//! - 被 `statmech/partition.rs` 调用获取光速
//! - 纯静态数据，无外部依赖

/// 玻尔兹曼常数 (J/K)，SI 定义值
pub const BOLTZMANN_J_PER_K: f64 = 1.380_649e-23;

/// 玻尔兹曼常数 (eV/K)
pub const BOLTZMANN_EV_PER_K: f64 = 8.617_333_262e-5;

/// 普朗克常数 (J·s)，SI 定义值
pub const PLANCK_J_S: f64 = 6.626_070_15e-34;

/// 普朗克常数 (eV·s)
pub const PLANCK_EV_S: f64 = 4.135_667_696e-15;

/// Hartree 能量 (eV)
pub const HARTREE_EV: f64 = 27.211_386_245_988;

/// Hartree-焦耳换算关系 (J)
pub const HARTREE_J: f64 = 4.359_744_722_207_1e-18;

/// 真空光速 (m/s)，SI 定义值
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;

/// 阿伏伽德罗常数 (1/mol)，SI 定义值
pub const AVOGADRO: f64 = 6.022_140_76e23;
