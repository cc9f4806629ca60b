// ==========================================
// 产品料号配置器 - 引擎错误类型
// ==========================================

use thiserror::Error;

/// 选择状态错误
///
/// 属性/代码不在当前 Schema 中说明 Schema 与状态不同步（调用方接线错误），
/// 一律显式报错，不静默回退默认值
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("选择状态尚未初始化")]
    NotInitialized,

    #[error("产品不存在: {0}")]
    UnknownProduct(String),

    #[error("属性不在当前 Schema 中: {0}")]
    UnknownAttribute(String),

    #[error("代码 {code} 不是属性 {attribute} 的有效选项")]
    InvalidCode { attribute: String, code: String },

    #[error("标签 {label} 不是属性 {attribute} 的有效选项")]
    UnknownLabel { attribute: String, label: String },

    #[error("标签 {label} 在属性 {attribute} 中不唯一，无法回查代码")]
    AmbiguousLabel { attribute: String, label: String },
}

pub type SelectionResult<T> = Result<T, SelectionError>;
