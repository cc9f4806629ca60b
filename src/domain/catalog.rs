// ==========================================
// 产品料号配置器 - 产品目录领域模型
// ==========================================
// 职责: 目录加载结果（每个产品一条，附已解析 Schema）
// 用途: 导入层写入，进程内只读共享
// ==========================================

use crate::domain::attribute::Schema;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ==========================================
// ProductEntry - 产品条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub product: String,     // Product 列
    pub model_code: String,  // Model 列（基础代码，可能为空）
    pub model_label: String, // Model_Label 列，缺失时回退为 model_code
    pub schema: Schema,      // 由 SKU_Order 解析
    pub row_number: usize,   // 源文件行号
}

// ==========================================
// CatalogSource - 数据源标识（缓存键）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSource {
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>, // 文件修改时间，用于缓存失效
    pub loaded_at: DateTime<Utc>,
}

// ==========================================
// Catalog - 产品目录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub source: CatalogSource,
    pub products: Vec<ProductEntry>, // 首次出现顺序，产品名唯一
}

impl Catalog {
    /// 产品列表（选择器选项）
    pub fn product_names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.product.as_str()).collect()
    }

    pub fn product(&self, name: &str) -> Option<&ProductEntry> {
        self.products.iter().find(|p| p.product == name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
