// ==========================================
// 产品料号配置器 - 原始单元格模型
// ==========================================
// 职责: 表格源（Excel/CSV）单元格的统一表示
// 红线: Empty 即"缺失"标记，空白文本同样视为缺失
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// CellValue - 单元格取值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 由文本构造（空白文本归一为 Empty）
    pub fn from_text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    /// 是否为缺失值（Empty 或空白文本）
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(n) => n.is_nan(),
            CellValue::Bool(_) => false,
        }
    }

    /// 是否为文本值（标签列只接受文本）
    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(s) if !s.trim().is_empty())
    }

    /// 文本形式；缺失值返回 None
    pub fn as_text(&self) -> Option<String> {
        if self.is_missing() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s.trim()),
            // 整数值不带小数部分（10.0 → "10"）
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

// ==========================================
// RawRow - 原始行记录
// ==========================================
// 用途: 导入层产出，Schema 解析器只读
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub row_number: usize,                  // 源文件行号（1 基，含表头）
    pub cells: HashMap<String, CellValue>,  // 列名 → 单元格
}

impl RawRow {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            cells: HashMap::new(),
        }
    }

    /// 按文本构造（测试与 CSV 场景）
    pub fn from_pairs<'a, I>(row_number: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let cells = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), CellValue::from_text(v)))
            .collect();
        Self { row_number, cells }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    /// 读取单元格；列不存在返回 None
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// 读取非缺失文本
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column).and_then(CellValue::as_text)
    }

    /// 整行是否全部缺失
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(CellValue::is_missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_blank_is_empty() {
        assert_eq!(CellValue::from_text("   "), CellValue::Empty);
        assert_eq!(CellValue::from_text(" R|G "), CellValue::Text("R|G".to_string()));
    }

    #[test]
    fn test_number_display_drops_integral_fraction() {
        assert_eq!(CellValue::Number(10.0).to_string(), "10");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_missing_and_text_checks() {
        assert!(CellValue::Empty.is_missing());
        assert!(CellValue::Number(f64::NAN).is_missing());
        assert!(!CellValue::Number(3.0).is_text());
        assert!(CellValue::Text("Red".to_string()).is_text());
    }

    #[test]
    fn test_row_text_and_blank() {
        let row = RawRow::from_pairs(2, [("Product", "Widget"), ("Model", "")]);
        assert_eq!(row.text("Product"), Some("Widget".to_string()));
        assert_eq!(row.text("Model"), None);
        assert_eq!(row.text("Missing"), None);
        assert!(!row.is_blank());

        let blank = RawRow::from_pairs(3, [("Product", " "), ("Model", "")]);
        assert!(blank.is_blank());
    }
}
