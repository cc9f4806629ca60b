// ==========================================
// 产品料号配置器 - 配置层
// ==========================================
// 职责: 目录路径、解析/拼接规则、日志级别
// 存储: config.json
// ==========================================

pub mod config_manager;

// 重导出核心配置
pub use config_manager::{
    config_keys, get_default_config_path, BuilderConfig, CompositionRules, SchemaRules,
};
