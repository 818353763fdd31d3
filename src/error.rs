//! # 统一错误处理模块
//!
//! 定义 Qpartition 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Qpartition 统一错误类型
#[derive(Error, Debug)]
pub enum QpartitionError {
    // ─────────────────────────────────────────────────────────────
    // 单位错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported unit: '{unit}'. Unit must be Hartree, eV, J, or kJ/mol")]
    UnsupportedUnit { unit: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, QpartitionError>;
