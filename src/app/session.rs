// ==========================================
// 产品料号配置器 - 选择会话
// ==========================================
// 职责: 单个用户会话的显式上下文（目录 + 选择状态）
// 流程: 每次交互 = 修复 → 渲染 → 拼接，同步完成
// 红线: 会话之间不共享选择状态；目录只读共享
// ==========================================

use crate::app::view::{render, RenderedView};
use crate::config::CompositionRules;
use crate::domain::{Catalog, ProductEntry, SelectionState};
use crate::engine::code_composer::compose_part_code_with;
use crate::engine::error::{SelectionError, SelectionResult};
use crate::engine::selection_store::SelectionStore;
use std::sync::Arc;
use uuid::Uuid;

pub struct SelectionSession {
    id: Uuid,
    catalog: Arc<Catalog>,
    rules: CompositionRules,
    store: SelectionStore,
}

impl SelectionSession {
    pub fn new(catalog: Arc<Catalog>, rules: CompositionRules) -> Self {
        let id = Uuid::new_v4();
        tracing::info!(session = %id, products = catalog.len(), "会话创建");
        Self {
            id,
            catalog,
            rules,
            store: SelectionStore::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 产品选择器选项
    pub fn products(&self) -> Vec<&str> {
        self.catalog.product_names()
    }

    pub fn state(&self) -> &SelectionState {
        self.store.state()
    }

    /// 选择（或切换）产品；对新 Schema 原地修复选择
    pub fn select_product(&mut self, product: &str) -> SelectionResult<()> {
        let _span = tracing::info_span!("session", id = %self.id).entered();

        let catalog = Arc::clone(&self.catalog);
        let entry = catalog
            .product(product)
            .ok_or_else(|| SelectionError::UnknownProduct(product.to_string()))?;

        self.store.activate(&entry.product, &entry.schema);
        Ok(())
    }

    /// 当前产品条目
    pub fn active_entry(&self) -> SelectionResult<&ProductEntry> {
        let product = self.store.product().ok_or(SelectionError::NotInitialized)?;
        self.catalog
            .product(product)
            .ok_or_else(|| SelectionError::UnknownProduct(product.to_string()))
    }

    /// 界面回传：按标签选择
    pub fn choose_label(&mut self, attribute: &str, label: &str) -> SelectionResult<()> {
        let _span = tracing::info_span!("session", id = %self.id).entered();

        let catalog = Arc::clone(&self.catalog);
        let entry = Self::entry_in(&catalog, &self.store)?;
        self.store.apply_label_choice(&entry.schema, attribute, label)
    }

    /// 界面回传：按代码选择
    pub fn choose_code(&mut self, attribute: &str, code: &str) -> SelectionResult<()> {
        let _span = tracing::info_span!("session", id = %self.id).entered();

        let catalog = Arc::clone(&self.catalog);
        let entry = Self::entry_in(&catalog, &self.store)?;
        self.store.apply_user_choice(&entry.schema, attribute, code)
    }

    /// 读取当前产品某属性的已选代码
    pub fn choice(&self, attribute: &str) -> SelectionResult<&str> {
        let entry = self.active_entry()?;
        self.store.choice(&entry.schema, attribute)
    }

    /// 当前料号（每次重新计算）
    pub fn part_code(&self) -> SelectionResult<String> {
        let entry = self.active_entry()?;
        Ok(compose_part_code_with(
            &entry.schema.order,
            self.store.choices(),
            &entry.model_code,
            &self.rules,
        ))
    }

    /// 完整渲染：先幂等修复，再纯函数渲染
    pub fn render(&mut self) -> SelectionResult<RenderedView> {
        let catalog = Arc::clone(&self.catalog);
        let entry = Self::entry_in(&catalog, &self.store)?;

        self.store.repair(&entry.schema)?;
        let view = render(entry, self.store.state(), &self.rules);
        tracing::debug!(session = %self.id, part_code = %view.part_code, "渲染完成");
        Ok(view)
    }

    fn entry_in<'c>(catalog: &'c Catalog, store: &SelectionStore) -> SelectionResult<&'c ProductEntry> {
        let product = store.product().ok_or(SelectionError::NotInitialized)?;
        catalog
            .product(product)
            .ok_or_else(|| SelectionError::UnknownProduct(product.to_string()))
    }
}
