// ==========================================
// 产品料号配置器 - 渲染视图
// ==========================================
// 职责: render(产品条目, 选择状态) → (控件列表, 料号)
// 红线: 纯函数，每次交互整体重算，无增量状态
// ==========================================

use crate::config::CompositionRules;
use crate::domain::{ProductEntry, SelectionState};
use crate::engine::code_composer::compose_part_code_with;
use serde::{Deserialize, Serialize};

/// 单属性单选控件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeControl {
    pub attribute: String,
    pub labels: Vec<String>,
    pub selected_index: Option<usize>,
    pub selected_code: Option<String>,
}

impl AttributeControl {
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_index
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }
}

/// 一次渲染的完整输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedView {
    pub product: String,
    pub model_code: String,
    pub model_label: String,
    pub controls: Vec<AttributeControl>,
    pub part_code: String,
}

/// 渲染（纯函数）
pub fn render(entry: &ProductEntry, state: &SelectionState, rules: &CompositionRules) -> RenderedView {
    let controls = entry
        .schema
        .attributes()
        .map(|definition| {
            let selected_code = state.choices.get(&definition.name).cloned();
            AttributeControl {
                attribute: definition.name.clone(),
                labels: definition.labels().map(str::to_string).collect(),
                selected_index: selected_code
                    .as_deref()
                    .and_then(|code| definition.index_of_code(code)),
                selected_code,
            }
        })
        .collect();

    let part_code = compose_part_code_with(
        &entry.schema.order,
        &state.choices,
        &entry.model_code,
        rules,
    );

    RenderedView {
        product: entry.product.clone(),
        model_code: entry.model_code.clone(),
        model_label: entry.model_label.clone(),
        controls,
        part_code,
    }
}
