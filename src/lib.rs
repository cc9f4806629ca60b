// ==========================================
// 产品料号配置器 - 核心库
// ==========================================
// 系统定位: 按产品目录逐属性单选，实时生成料号
// 核心: Schema 解析 / 选择状态维护 / 料号拼接
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 解析/状态/拼接
pub mod engine;

// 导入层 - 外部目录
pub mod importer;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 应用层 - 会话与渲染
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    AttributeDefinition, AttributeOption, Catalog, CellValue, Choices, ProductEntry, RawRow,
    Schema, SchemaIssue, SelectionState, StoreStatus,
};

pub use engine::{
    compose_part_code, initialize_or_repair, parse_schema, SelectionError, SelectionStore,
};

pub use app::{AppState, RenderedView, SelectionSession};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Product Part Code Builder";
