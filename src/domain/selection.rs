// ==========================================
// 产品料号配置器 - 选择状态领域模型
// ==========================================
// 职责: 当前会话的 属性 → 已选代码 映射
// 红线: 初始化后，当前 Schema 中每个属性的代码必须有效
//       （不可缺失，不可指向旧产品的失效代码）
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 属性名 → 已选代码
pub type Choices = HashMap<String, String>;

// ==========================================
// StoreStatus - 状态机
// ==========================================
// Uninitialized → Valid(P, v)   首次激活产品
// Valid(P1, v)  → Valid(P2, v+1) 切换产品（原地修复，不清空）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreStatus {
    Uninitialized,
    Valid {
        product: String,
        schema_version: u64,
    },
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreStatus::Uninitialized => write!(f, "UNINITIALIZED"),
            StoreStatus::Valid {
                product,
                schema_version,
            } => write!(f, "VALID({}, v{})", product, schema_version),
        }
    }
}

// ==========================================
// SelectionState - 选择状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub status: StoreStatus,
    pub choices: Choices, // 含其他产品遗留的条目（不参与当前渲染）
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            status: StoreStatus::Uninitialized,
            choices: Choices::new(),
        }
    }
}

impl SelectionState {
    pub fn product(&self) -> Option<&str> {
        match &self.status {
            StoreStatus::Uninitialized => None,
            StoreStatus::Valid { product, .. } => Some(product.as_str()),
        }
    }

    pub fn is_initialized(&self) -> bool {
        !matches!(self.status, StoreStatus::Uninitialized)
    }
}
