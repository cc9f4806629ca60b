// ==========================================
// 产品料号配置器 - 导入层
// ==========================================
// 职责: 外部目录导入,生成产品条目与 Schema
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod catalog_importer_trait;
pub mod catalog_loader;
pub mod data_cleaner;
pub mod error;
pub mod file_parser;

// 重导出核心类型
pub use catalog_loader::CatalogLoader;
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};

// 重导出 Trait 接口
pub use catalog_importer_trait::{CatalogImporter, FileParser};
