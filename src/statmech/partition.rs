//! # 配分函数求值
//!
//! 实现统计力学配分函数计算的核心算法。
//!
//! ## 算法概述
//! - 离散谱：对每个温度 T 求和 Σⱼ exp(-Eⱼ/(k_B·T))
//! - 谐振子近似：闭式解 q = exp(ε/2β) / (1 - exp(ε/β))，
//!   其中 β = k_B·T，ε = h·ν·c（ν 以 cm⁻¹ 计，光速换算为 cm/s）
//!
//! ## 参考
//! - McQuarrie, Statistical Mechanics, Ch. 4
//!
//! ## 依赖关系
//! - 使用 `statmech/units.rs` 解析单位并查取常数
//! - 使用 `statmech/constants.rs` 的光速
//! - 使用 `rayon` 并行遍历温度序列

use crate::error::Result;
use crate::statmech::constants;
use crate::statmech::units::EnergyUnit;

use rayon::prelude::*;

/// 计算离散能谱的配分函数
///
/// 对每个温度 Tᵢ 返回 Σⱼ exp(-Eⱼ/(k_B·Tᵢ))，输出与 `temperatures`
/// 等长且逐元素对应。本征值与温度必须和 `unit` 同一单位制；
/// 不做正定性检查，T = 0 等退化输入按 IEEE 754 语义传播 inf/nan。
pub fn discrete_partition_function(
    eigenvalues: &[f64],
    temperatures: &[f64],
    unit: &str,
) -> Result<Vec<f64>> {
    let kb = unit.parse::<EnergyUnit>()?.constants().boltzmann;

    Ok(temperatures
        .par_iter()
        .map(|&t| {
            let beta = kb * t;
            eigenvalues.iter().map(|&e| (-e / beta).exp()).sum::<f64>()
        })
        .collect())
}

/// 计算量子谐振子近似的配分函数
///
/// `frequency` 为振动频率（cm⁻¹）；对每个温度 Tᵢ 返回
/// exp(ε/2β) / (1 - exp(ε/β))，β = k_B·Tᵢ，ε = h·ν·c。
/// 单位解析出的 h 为负值，指数结构与该符号配套。
/// ν = 0 或 T = 0 产生除零退化，按 IEEE 754 语义传播，不作为错误处理。
pub fn harmonic_oscillator_partition_function(
    frequency: f64,
    temperatures: &[f64],
    unit: &str,
) -> Result<Vec<f64>> {
    let consts = unit.parse::<EnergyUnit>()?.constants();

    // 光速换算为 cm/s，与 cm⁻¹ 频率匹配
    let c = constants::SPEED_OF_LIGHT_M_PER_S * 100.0;
    let energy_quantum = consts.planck * frequency * c;

    Ok(temperatures
        .par_iter()
        .map(|&t| {
            let beta = consts.boltzmann * t;
            (energy_quantum / (2.0 * beta)).exp() / (1.0 - (energy_quantum / beta).exp())
        })
        .collect())
}
