// ==========================================
// 产品料号配置器 - 目录导入 Trait
// ==========================================
// 职责: 定义目录导入接口（不包含实现）
// ==========================================

use crate::domain::{Catalog, RawRow};
use crate::importer::error::ImportResult;
use std::path::Path;
use std::sync::Arc;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 行记录列表（已跳过全空行）
    /// - Err: 文件读取错误、格式错误
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// CatalogImporter Trait
// ==========================================
// 用途: 目录加载主接口
// 实现者: CatalogLoader
pub trait CatalogImporter: Send + Sync {
    /// 加载目录（带进程级缓存，源文件变化时重新加载）
    fn load<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Arc<Catalog>>;
}
