// ==========================================
// 产品料号配置器 - 引擎层
// ==========================================
// 职责: Schema 解析 / 选择状态维护 / 料号拼接
// 红线: 不读文件，不渲染界面
// ==========================================

pub mod code_composer;
pub mod error;
pub mod schema_parser;
pub mod selection_store;

// 重导出核心函数与类型
pub use code_composer::{compose_fragments, compose_part_code, compose_part_code_with};
pub use error::{SelectionError, SelectionResult};
pub use schema_parser::{parse_schema, parse_schema_with, SchemaParser};
pub use selection_store::{initialize_or_repair, SelectionStore};
