//! # 能量单位解析
//!
//! 将能量单位标签映射为对应单位制下的玻尔兹曼常数和普朗克常数。
//! 本征值、频率与温度之外的全部量纲信息都集中在这里解析一次，
//! 两个配分函数入口共用同一查表。
//!
//! ## 支持单位
//! - `Hartree`: 原子单位制（通过 Hartree 能量换算）
//! - `eV`: 电子伏特
//! - `J`: 国际单位制（焦耳）
//! - `kJ/mol`: 摩尔能量基准（SI 值除以 1000 再乘阿伏伽德罗常数）
//!
//! ## 依赖关系
//! - 被 `statmech/partition.rs` 调用
//! - 使用 `statmech/constants.rs` 的 CODATA 参考值
//! - 使用 `error.rs` 的 UnsupportedUnit 错误

use crate::error::QpartitionError;
use crate::statmech::constants;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 能量单位标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    /// Hartree（原子单位制）
    Hartree,
    /// 电子伏特 (eV)
    ElectronVolt,
    /// 焦耳 (J)
    Joule,
    /// 千焦每摩尔 (kJ/mol)
    KiloJoulePerMol,
}

/// 单位解析结果：给定单位制下的物理常数
///
/// `planck` 为负值（相对表值取反），`partition.rs` 中谐振子公式的
/// 指数结构依赖该符号约定。
#[derive(Debug, Clone, Copy)]
pub struct UnitConstants {
    /// 玻尔兹曼常数（所选能量单位 / K）
    pub boltzmann: f64,
    /// 普朗克常数（所选能量单位 · s，取负号）
    pub planck: f64,
}

impl EnergyUnit {
    /// 解析出该单位制下的玻尔兹曼常数和普朗克常数
    pub fn constants(self) -> UnitConstants {
        match self {
            EnergyUnit::Hartree => UnitConstants {
                boltzmann: constants::BOLTZMANN_EV_PER_K / constants::HARTREE_EV,
                planck: -constants::PLANCK_J_S / constants::HARTREE_J,
            },
            EnergyUnit::ElectronVolt => UnitConstants {
                boltzmann: constants::BOLTZMANN_EV_PER_K,
                planck: -constants::PLANCK_EV_S,
            },
            EnergyUnit::Joule => UnitConstants {
                boltzmann: constants::BOLTZMANN_J_PER_K,
                planck: -constants::PLANCK_J_S,
            },
            EnergyUnit::KiloJoulePerMol => UnitConstants {
                boltzmann: constants::BOLTZMANN_J_PER_K / 1000.0 * constants::AVOGADRO,
                planck: -constants::PLANCK_J_S / 1000.0 * constants::AVOGADRO,
            },
        }
    }
}

impl std::fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnergyUnit::Hartree => write!(f, "Hartree"),
            EnergyUnit::ElectronVolt => write!(f, "eV"),
            EnergyUnit::Joule => write!(f, "J"),
            EnergyUnit::KiloJoulePerMol => write!(f, "kJ/mol"),
        }
    }
}

impl FromStr for EnergyUnit {
    type Err = QpartitionError;

    /// 精确匹配四个标签（区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hartree" => Ok(EnergyUnit::Hartree),
            "eV" => Ok(EnergyUnit::ElectronVolt),
            "J" => Ok(EnergyUnit::Joule),
            "kJ/mol" => Ok(EnergyUnit::KiloJoulePerMol),
            other => Err(QpartitionError::UnsupportedUnit {
                unit: other.to_string(),
            }),
        }
    }
}
