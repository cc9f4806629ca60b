// ==========================================
// 产品料号配置器 - 选择状态存储
// ==========================================
// 职责: 持有当前产品各属性的已选代码，并在两类触发下保持有效
//       1. 产品切换  2. 用户改选
// 红线: 修复幂等（执行两次 = 执行一次）
//       切换产品原地修复，不清空同名属性的有效选择
//       读取不在 Schema 中的属性 → 显式报错
// ==========================================

use crate::domain::{Choices, Schema, SelectionState, StoreStatus};
use crate::engine::error::{SelectionError, SelectionResult};

/// 初始化或修复选择
///
/// 对 Schema 中每个属性：条目缺失或代码不在当前选项中 → 置为第一个选项代码；
/// 否则保持不变。不在 Schema 中的条目原样保留（当前不参与渲染）。
pub fn initialize_or_repair(schema: &Schema, previous: &Choices) -> Choices {
    let mut choices = previous.clone();

    for (name, definition) in &schema.definitions {
        let valid = choices
            .get(name)
            .map(|code| definition.contains_code(code))
            .unwrap_or(false);
        if valid {
            continue;
        }

        match definition.first_code() {
            Some(first) => {
                tracing::debug!(attribute = %name, code = first, "选择修复为默认选项");
                choices.insert(name.clone(), first.to_string());
            }
            None => {
                tracing::warn!(attribute = %name, "属性没有任何选项，无法设置默认值");
                choices.remove(name);
            }
        }
    }

    choices
}

// ==========================================
// SelectionStore
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    state: SelectionState,
    next_version: u64,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn status(&self) -> &StoreStatus {
        &self.state.status
    }

    pub fn product(&self) -> Option<&str> {
        self.state.product()
    }

    pub fn choices(&self) -> &Choices {
        &self.state.choices
    }

    /// 激活产品（首次选择或切换产品）
    ///
    /// Uninitialized → Valid(P, v)；Valid(P1) → Valid(P2, v+1)
    pub fn activate(&mut self, product: &str, schema: &Schema) {
        self.state.choices = initialize_or_repair(schema, &self.state.choices);
        self.next_version += 1;

        let previous = std::mem::replace(
            &mut self.state.status,
            StoreStatus::Valid {
                product: product.to_string(),
                schema_version: self.next_version,
            },
        );
        tracing::info!("选择状态 {} → {}", previous, self.state.status);
    }

    /// 渲染前的幂等修复（不改变状态机版本）
    pub fn repair(&mut self, schema: &Schema) -> SelectionResult<()> {
        if !self.state.is_initialized() {
            return Err(SelectionError::NotInitialized);
        }
        self.state.choices = initialize_or_repair(schema, &self.state.choices);
        Ok(())
    }

    /// 应用用户选择（按代码）
    ///
    /// 界面只提供有效选项，这里仍做防御性校验
    pub fn apply_user_choice(
        &mut self,
        schema: &Schema,
        attribute: &str,
        code: &str,
    ) -> SelectionResult<()> {
        if !self.state.is_initialized() {
            return Err(SelectionError::NotInitialized);
        }

        let definition = schema
            .definition(attribute)
            .ok_or_else(|| Self::desync(attribute))?;

        if !definition.contains_code(code) {
            return Err(SelectionError::InvalidCode {
                attribute: attribute.to_string(),
                code: code.to_string(),
            });
        }

        tracing::debug!(attribute, code, "用户选择");
        self.state
            .choices
            .insert(attribute.to_string(), code.to_string());
        Ok(())
    }

    /// 应用用户选择（按显示标签回查代码）
    pub fn apply_label_choice(
        &mut self,
        schema: &Schema,
        attribute: &str,
        label: &str,
    ) -> SelectionResult<()> {
        let definition = schema
            .definition(attribute)
            .ok_or_else(|| Self::desync(attribute))?;

        let code = match definition.codes_for_label(label).as_slice() {
            [code] => code.to_string(),
            [] => {
                return Err(SelectionError::UnknownLabel {
                    attribute: attribute.to_string(),
                    label: label.to_string(),
                })
            }
            _ => {
                return Err(SelectionError::AmbiguousLabel {
                    attribute: attribute.to_string(),
                    label: label.to_string(),
                })
            }
        };

        self.apply_user_choice(schema, attribute, &code)
    }

    /// 读取属性的已选代码
    pub fn choice(&self, schema: &Schema, attribute: &str) -> SelectionResult<&str> {
        if !self.state.is_initialized() {
            return Err(SelectionError::NotInitialized);
        }
        if schema.definition(attribute).is_none() {
            return Err(Self::desync(attribute));
        }

        self.state
            .choices
            .get(attribute)
            .map(String::as_str)
            .ok_or(SelectionError::NotInitialized)
    }

    fn desync(attribute: &str) -> SelectionError {
        tracing::error!(attribute, "Schema 与选择状态不同步: 属性不在当前 Schema 中");
        SelectionError::UnknownAttribute(attribute.to_string())
    }
}
