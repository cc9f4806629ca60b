// ==========================================
// 产品料号配置器 - 属性与 Schema 领域模型
// ==========================================
// 职责: 描述一个产品的可配置属性（代码/标签选项对）
// 红线: 选项顺序 = 源数据插入顺序，不排序
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// AttributeOption - 属性选项
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeOption {
    pub code: String,  // 机器代码（拼入料号）
    pub label: String, // 显示标签（界面回查代码的键）
}

impl AttributeOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

// ==========================================
// AttributeDefinition - 属性定义
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub name: String,
    pub options: Vec<AttributeOption>,
}

impl AttributeDefinition {
    pub fn new(name: impl Into<String>, options: Vec<AttributeOption>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.code.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.label.as_str())
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.codes().any(|c| c == code)
    }

    /// 默认选项代码（下标 0，解析顺序）
    pub fn first_code(&self) -> Option<&str> {
        self.options.first().map(|o| o.code.as_str())
    }

    pub fn label_for_code(&self, code: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.code == code)
            .map(|o| o.label.as_str())
    }

    /// 标签回查代码，返回所有匹配项
    ///
    /// 标签应唯一；多于一个匹配说明源数据有重复标签，由调用方拒绝
    pub fn codes_for_label(&self, label: &str) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.label == label)
            .map(|o| o.code.as_str())
            .collect()
    }

    pub fn index_of_code(&self, code: &str) -> Option<usize> {
        self.options.iter().position(|o| o.code == code)
    }
}

// ==========================================
// SchemaIssue - 数据质量问题
// ==========================================
// 说明: 解析器从不失败，问题仅记录并输出 warn 日志
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaIssue {
    /// 代码与标签数量不一致，按较短者截断
    LengthMismatch {
        attribute: String,
        codes: usize,
        labels: usize,
    },
    DuplicateCode {
        attribute: String,
        code: String,
    },
    DuplicateLabel {
        attribute: String,
        label: String,
    },
    /// SKU_Order 中重复声明的属性，仅保留首次出现
    DuplicateAttribute {
        attribute: String,
    },
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaIssue::LengthMismatch {
                attribute,
                codes,
                labels,
            } => write!(
                f,
                "属性 {} 代码数 {} 与标签数 {} 不一致，已截断为 {}",
                attribute,
                codes,
                labels,
                codes.min(labels)
            ),
            SchemaIssue::DuplicateCode { attribute, code } => {
                write!(f, "属性 {} 存在重复代码: {}", attribute, code)
            }
            SchemaIssue::DuplicateLabel { attribute, label } => {
                write!(f, "属性 {} 存在重复标签: {}", attribute, label)
            }
            SchemaIssue::DuplicateAttribute { attribute } => {
                write!(f, "属性 {} 在 SKU_Order 中重复声明", attribute)
            }
        }
    }
}

// ==========================================
// Schema - 单产品属性结构
// ==========================================
// order: 有效顺序（已过滤无数据属性），决定显示与拼接顺序
// declared_order: SKU_Order 原始声明顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub order: Vec<String>,
    pub declared_order: Vec<String>,
    pub definitions: HashMap<String, AttributeDefinition>,
    pub issues: Vec<SchemaIssue>,
}

impl Schema {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn definition(&self, name: &str) -> Option<&AttributeDefinition> {
        self.definitions.get(name)
    }

    /// 按有效顺序遍历属性定义
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.definitions.get(name))
    }

    /// 声明了但因无数据被跳过的属性
    pub fn skipped(&self) -> Vec<&str> {
        self.declared_order
            .iter()
            .filter(|name| !self.definitions.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}
