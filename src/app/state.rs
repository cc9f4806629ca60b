// ==========================================
// 产品料号配置器 - 应用状态
// ==========================================
// 职责: 管理应用级共享资源（配置 + 目录缓存）
// 说明: 目录进程内只读共享；选择状态归各会话所有
// ==========================================

use crate::app::error::AppResult;
use crate::app::session::SelectionSession;
use crate::config::BuilderConfig;
use crate::domain::Catalog;
use crate::importer::{CatalogImporter, CatalogLoader};
use std::sync::Arc;

/// 应用状态
pub struct AppState {
    /// 生效配置
    pub config: BuilderConfig,

    /// 目录加载器（含缓存）
    pub loader: Arc<CatalogLoader>,
}

impl AppState {
    pub fn new(config: BuilderConfig) -> Self {
        tracing::info!(
            "初始化AppState，目录路径: {}, 工作表: {}",
            config.catalog_path.display(),
            config.sheet_name
        );
        let loader = Arc::new(CatalogLoader::from_config(&config));
        Self { config, loader }
    }

    /// 当前目录（命中缓存则不重读）
    pub fn catalog(&self) -> AppResult<Arc<Catalog>> {
        Ok(self.loader.load(&self.config.catalog_path)?)
    }

    /// 创建新的选择会话
    pub fn new_session(&self) -> AppResult<SelectionSession> {
        let catalog = self.catalog()?;
        Ok(SelectionSession::new(
            catalog,
            self.config.composition.clone(),
        ))
    }
}
