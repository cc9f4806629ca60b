// ==========================================
// 产品料号配置器 - 数据清洗器
// ==========================================
// 职责: TRIM / NULL 标准化 / 分隔列表拆分
// ==========================================

use crate::domain::CellValue;

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// 缺失值（Empty / 空白 / NaN）统一为 None
    pub fn normalize_null(&self, value: Option<&CellValue>) -> Option<String> {
        value.and_then(CellValue::as_text)
    }

    /// 拆分分隔列表
    ///
    /// 每段 TRIM，但保留空段位置（代码与标签按位置配对）
    pub fn split_list(&self, value: &str, delimiter: char) -> Vec<String> {
        value
            .split(delimiter)
            .map(|part| self.clean_text(part))
            .collect()
    }
}
