// ==========================================
// 产品料号配置器 - 目录加载器
// ==========================================
// 流程:
// 1. 文件读取与解析（Excel/CSV → RawRow）
// 2. 按 Product 去重（首行生效）
// 3. 每个产品解析 Schema（一次性，结果只读共享）
// 缓存: 以规范化路径为键，源文件修改时间变化时失效重载
// ==========================================

use crate::config::{config_keys, BuilderConfig, SchemaRules};
use crate::domain::{Catalog, CatalogSource, ProductEntry, RawRow};
use crate::engine::schema_parser::parse_schema_with;
use crate::importer::catalog_importer_trait::CatalogImporter;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

// ==========================================
// CatalogLoader
// ==========================================
pub struct CatalogLoader {
    sheet_name: Option<String>,
    rules: SchemaRules,
    cache: Mutex<HashMap<PathBuf, Arc<Catalog>>>,
}

impl CatalogLoader {
    pub fn new(sheet_name: Option<String>, rules: SchemaRules) -> Self {
        Self {
            sheet_name,
            rules,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::new(Some(config.sheet_name.clone()), config.schema.clone())
    }

    /// 清空缓存（下次 load 强制重读）
    pub fn invalidate(&self) -> ImportResult<()> {
        self.lock_cache()?.clear();
        Ok(())
    }

    /// 由已解析行构建目录（不经过缓存）
    pub fn build_catalog(&self, rows: &[RawRow], source: CatalogSource) -> ImportResult<Catalog> {
        let cleaner = DataCleaner;

        if !rows
            .iter()
            .any(|r| r.get(config_keys::COLUMN_PRODUCT).is_some())
        {
            return Err(ImportError::MissingColumn(
                config_keys::COLUMN_PRODUCT.to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let mut products = Vec::new();

        for row in rows {
            let Some(product) = cleaner.normalize_null(row.get(config_keys::COLUMN_PRODUCT))
            else {
                continue;
            };
            if !seen.insert(product.clone()) {
                tracing::debug!(row = row.row_number, product = %product, "重复产品行，忽略");
                continue;
            }

            let model_code = cleaner
                .normalize_null(row.get(config_keys::COLUMN_MODEL))
                .unwrap_or_default();
            let model_label = cleaner
                .normalize_null(row.get(config_keys::COLUMN_MODEL_LABEL))
                .unwrap_or_else(|| model_code.clone());

            let schema = parse_schema_with(row, &self.rules);
            tracing::debug!(
                product = %product,
                attributes = schema.order.len(),
                skipped = schema.skipped().len(),
                "产品 Schema 解析完成"
            );

            products.push(ProductEntry {
                product,
                model_code,
                model_label,
                schema,
                row_number: row.row_number,
            });
        }

        if products.is_empty() {
            return Err(ImportError::EmptyCatalog(source.path.display().to_string()));
        }

        Ok(Catalog { source, products })
    }

    fn lock_cache(&self) -> ImportResult<std::sync::MutexGuard<'_, HashMap<PathBuf, Arc<Catalog>>>> {
        self.cache
            .lock()
            .map_err(|e| ImportError::InternalError(format!("锁获取失败: {}", e)))
    }

    fn modified_time(path: &Path) -> Option<DateTime<Utc>> {
        std::fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from)
    }
}

impl CatalogImporter for CatalogLoader {
    fn load<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Arc<Catalog>> {
        let path = file_path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let key = path.canonicalize()?;
        let modified = Self::modified_time(&key);

        if let Some(cached) = self.lock_cache()?.get(&key) {
            if cached.source.modified == modified {
                tracing::trace!("目录缓存命中: {}", key.display());
                return Ok(Arc::clone(cached));
            }
            tracing::info!("目录源文件已变化，重新加载: {}", key.display());
        }

        let rows = UniversalFileParser::new(self.sheet_name.clone()).parse(&key)?;
        let source = CatalogSource {
            path: key.clone(),
            modified,
            loaded_at: Utc::now(),
        };
        let catalog = Arc::new(self.build_catalog(&rows, source)?);

        tracing::info!(
            "目录加载完成: {} ({} 行, {} 个产品)",
            key.display(),
            rows.len(),
            catalog.len()
        );

        self.lock_cache()?.insert(key, Arc::clone(&catalog));
        Ok(catalog)
    }
}
