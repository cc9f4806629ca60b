// ==========================================
// 产品料号配置器 - 领域模型层
// ==========================================
// 职责: 定义属性、Schema、选择状态、产品目录
// 红线: 不含文件读取逻辑,不含引擎逻辑
// ==========================================

pub mod attribute;
pub mod catalog;
pub mod cell;
pub mod selection;

// 重导出核心类型
pub use attribute::{AttributeDefinition, AttributeOption, Schema, SchemaIssue};
pub use catalog::{Catalog, CatalogSource, ProductEntry};
pub use cell::{CellValue, RawRow};
pub use selection::{Choices, SelectionState, StoreStatus};
