// ==========================================
// 产品料号配置器 - 应用层错误类型
// ==========================================

use crate::engine::SelectionError;
use crate::importer::ImportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("目录导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("选择失败: {0}")]
    Selection(#[from] SelectionError),
}

pub type AppResult<T> = Result<T, AppError>;
