// ==========================================
// 产品料号配置器 - 属性 Schema 解析器
// ==========================================
// 职责: 目录单行 → 有序属性定义 + 有效顺序
// 输入: SKU_Order（"|" 分隔属性名）+ 各属性选项列 + 可选 <属性>_Label 列
// 红线: 从不失败，最坏情况返回空 Schema
//       无数据属性整体跳过，不进入有效顺序
//       代码/标签数量不一致时按较短者截断（兼容保留，记录问题）
// ==========================================

use crate::config::SchemaRules;
use crate::domain::{AttributeDefinition, AttributeOption, RawRow, Schema, SchemaIssue};
use crate::importer::data_cleaner::DataCleaner;
use std::collections::HashSet;

/// 按默认规则解析
pub fn parse_schema(row: &RawRow) -> Schema {
    parse_schema_with(row, &SchemaRules::default())
}

/// 按指定规则解析
pub fn parse_schema_with(row: &RawRow, rules: &SchemaRules) -> Schema {
    SchemaParser::new(rules).parse(row)
}

// ==========================================
// SchemaParser
// ==========================================
pub struct SchemaParser<'a> {
    rules: &'a SchemaRules,
    cleaner: DataCleaner,
}

impl<'a> SchemaParser<'a> {
    pub fn new(rules: &'a SchemaRules) -> Self {
        Self {
            rules,
            cleaner: DataCleaner,
        }
    }

    pub fn parse(&self, row: &RawRow) -> Schema {
        let mut schema = Schema::empty();

        let declared = match self.cleaner.normalize_null(row.get(&self.rules.order_column)) {
            Some(value) => self.cleaner.split_list(&value, self.rules.list_delimiter),
            None => {
                tracing::debug!(
                    row = row.row_number,
                    "{} 缺失，返回空 Schema",
                    self.rules.order_column
                );
                return schema;
            }
        };

        for name in &declared {
            if schema.definitions.contains_key(name) {
                schema.issues.push(SchemaIssue::DuplicateAttribute {
                    attribute: name.clone(),
                });
                continue;
            }

            // 选项列缺失 → 跳过
            let Some(raw_codes) = self.cleaner.normalize_null(row.get(name)) else {
                tracing::trace!(row = row.row_number, attribute = %name, "属性无数据，跳过");
                continue;
            };

            let codes = self.cleaner.split_list(&raw_codes, self.rules.list_delimiter);
            let labels = self.labels_for(row, name, &codes);

            if labels.len() != codes.len() {
                schema.issues.push(SchemaIssue::LengthMismatch {
                    attribute: name.clone(),
                    codes: codes.len(),
                    labels: labels.len(),
                });
            }

            // 按位置配对，截断到较短者
            let options: Vec<AttributeOption> = codes
                .into_iter()
                .zip(labels)
                .map(|(code, label)| AttributeOption::new(code, label))
                .collect();

            schema
                .issues
                .extend(Self::uniqueness_issues(name, &options));
            schema.order.push(name.clone());
            schema
                .definitions
                .insert(name.clone(), AttributeDefinition::new(name.clone(), options));
        }

        schema.declared_order = declared;

        for issue in &schema.issues {
            tracing::warn!(row = row.row_number, "目录数据质量问题: {}", issue);
        }

        schema
    }

    /// 标签列：存在且为文本时拆分，否则以代码作为标签
    fn labels_for(&self, row: &RawRow, name: &str, codes: &[String]) -> Vec<String> {
        match row.get(&self.rules.label_column(name)) {
            Some(cell) if cell.is_text() => {
                self.cleaner
                    .split_list(&cell.to_string(), self.rules.list_delimiter)
            }
            _ => codes.to_vec(),
        }
    }

    fn uniqueness_issues(name: &str, options: &[AttributeOption]) -> Vec<SchemaIssue> {
        let mut issues = Vec::new();
        let mut seen_codes = HashSet::new();
        let mut seen_labels = HashSet::new();

        for option in options {
            if !seen_codes.insert(option.code.as_str()) {
                issues.push(SchemaIssue::DuplicateCode {
                    attribute: name.to_string(),
                    code: option.code.clone(),
                });
            }
            if !seen_labels.insert(option.label.as_str()) {
                issues.push(SchemaIssue::DuplicateLabel {
                    attribute: name.to_string(),
                    label: option.label.clone(),
                });
            }
        }

        issues
    }
}
