// ==========================================
// 产品料号配置器 - 配置管理器
// ==========================================
// 职责: 配置加载（默认值 → JSON 文件 → 环境变量 → 命令行）
// 存储: config.json（用户配置目录）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ==========================================
// 配置键与默认值
// ==========================================
pub mod config_keys {
    /// 配置文件路径（环境变量）
    pub const ENV_CONFIG_PATH: &str = "PART_CODE_BUILDER_CONFIG";
    /// 目录文件路径（环境变量）
    pub const ENV_CATALOG_PATH: &str = "PART_CODE_BUILDER_CATALOG";

    pub const DEFAULT_SHEET_NAME: &str = "Raw Data";
    pub const DEFAULT_CATALOG_FILE: &str = "sku-permutation-generator.xlsm";
    pub const DEFAULT_LOG_FILTER: &str = "info";

    // ===== 目录列名 =====
    pub const COLUMN_PRODUCT: &str = "Product";
    pub const COLUMN_MODEL: &str = "Model";
    pub const COLUMN_MODEL_LABEL: &str = "Model_Label";
    pub const COLUMN_SKU_ORDER: &str = "SKU_Order";
    pub const LABEL_SUFFIX: &str = "_Label";

    // ===== 拼接规则 =====
    pub const LIST_DELIMITER: char = '|';
    pub const CODE_SEPARATOR: char = '-';
    pub const MISSING_PLACEHOLDER: &str = "--";
    pub const BASE_ATTRIBUTE: &str = "Model";
}

// ==========================================
// SchemaRules - Schema 解析规则
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaRules {
    pub order_column: String,
    pub list_delimiter: char,
    pub label_suffix: String,
}

impl Default for SchemaRules {
    fn default() -> Self {
        Self {
            order_column: config_keys::COLUMN_SKU_ORDER.to_string(),
            list_delimiter: config_keys::LIST_DELIMITER,
            label_suffix: config_keys::LABEL_SUFFIX.to_string(),
        }
    }
}

impl SchemaRules {
    pub fn label_column(&self, attribute: &str) -> String {
        format!("{}{}", attribute, self.label_suffix)
    }
}

// ==========================================
// CompositionRules - 料号拼接规则
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionRules {
    pub separator: char,
    pub missing_placeholder: String, // 兼容保留的缺失占位符
    pub base_attribute: String,      // 首属性为此名时不再前置基础代码
}

impl Default for CompositionRules {
    fn default() -> Self {
        Self {
            separator: config_keys::CODE_SEPARATOR,
            missing_placeholder: config_keys::MISSING_PLACEHOLDER.to_string(),
            base_attribute: config_keys::BASE_ATTRIBUTE.to_string(),
        }
    }
}

// ==========================================
// BuilderConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub catalog_path: PathBuf,
    pub sheet_name: String,
    pub log_filter: String,
    pub schema: SchemaRules,
    pub composition: CompositionRules,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(config_keys::DEFAULT_CATALOG_FILE),
            sheet_name: config_keys::DEFAULT_SHEET_NAME.to_string(),
            log_filter: config_keys::DEFAULT_LOG_FILTER.to_string(),
            schema: SchemaRules::default(),
            composition: CompositionRules::default(),
        }
    }
}

impl BuilderConfig {
    /// 从 JSON 文件读取（缺失字段取默认值）
    pub fn from_file(path: &Path) -> ImportResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            key: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ImportError::ConfigReadError {
            key: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 加载配置
    ///
    /// # 顺序
    /// 1. 显式路径（命令行 --config）
    /// 2. 环境变量 PART_CODE_BUILDER_CONFIG
    /// 3. 用户配置目录下 part-code-builder/config.json（存在时）
    /// 4. 默认值
    ///
    /// 最后应用 PART_CODE_BUILDER_CATALOG 覆盖目录路径
    pub fn load(explicit: Option<&Path>) -> ImportResult<Self> {
        let mut config = match resolve_config_path(explicit) {
            Some(path) => {
                tracing::debug!("读取配置文件: {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                tracing::debug!("未找到配置文件，使用默认配置");
                Self::default()
            }
        };

        if let Ok(path) = std::env::var(config_keys::ENV_CATALOG_PATH) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                config.catalog_path = PathBuf::from(trimmed);
            }
        }

        Ok(config)
    }
}

/// 默认配置文件路径（用户配置目录）
pub fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("part-code-builder").join("config.json"))
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(config_keys::ENV_CONFIG_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    get_default_config_path().filter(|p| p.exists())
}
