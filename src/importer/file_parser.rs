// ==========================================
// 产品料号配置器 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: Excel (.xlsx/.xlsm/.xls) / CSV (.csv)
// ==========================================

use crate::domain::{CellValue, RawRow};
use crate::importer::catalog_importer_trait::FileParser;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

const EXCEL_EXTENSIONS: [&str; 3] = ["xlsx", "xlsm", "xls"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
// CSV 单元格一律按文本处理，空白即缺失
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            // 表头为第 1 行
            let mut row = RawRow::new(idx + 2);

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    if header.is_empty() {
                        continue;
                    }
                    row.insert(header.clone(), CellValue::from_text(value));
                }
            }

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }

            rows.push(row);
        }

        tracing::debug!("CSV 解析完成: {} 行, {} 列", rows.len(), headers.len());
        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser {
    /// 目标工作表；不存在时回退到第一个工作表
    pub sheet_name: Option<String>,
}

impl ExcelParser {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: Some(sheet_name.into()),
        }
    }

    pub fn first_sheet() -> Self {
        Self { sheet_name: None }
    }

    fn cell_value(cell: &Data) -> CellValue {
        match cell {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(s) => CellValue::from_text(s),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            other => CellValue::from_text(&other.to_string()),
        }
    }

    fn pick_sheet(&self, sheet_names: &[String]) -> ImportResult<String> {
        if let Some(wanted) = &self.sheet_name {
            if sheet_names.iter().any(|s| s == wanted) {
                return Ok(wanted.clone());
            }
            tracing::warn!("工作表 {} 不存在，回退到第一个工作表", wanted);
        }

        sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::SheetNotFound("Excel 文件无工作表".to_string()))
    }
}

impl FileParser for ExcelParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;
        let sheet_name = self.pick_sheet(&workbook.sheet_names())?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // 提取表头（第一行）
        let mut range_rows = range.rows();
        let header_row = range_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, data_row) in range_rows.enumerate() {
            let mut row = RawRow::new(idx + 2);

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    if header.is_empty() {
                        continue;
                    }
                    row.insert(header.clone(), Self::cell_value(cell));
                }
            }

            if row.is_blank() {
                continue;
            }

            rows.push(row);
        }

        tracing::debug!(
            "Excel 解析完成: 工作表 {}, {} 行, {} 列",
            sheet_name,
            rows.len(),
            headers.len()
        );
        Ok(rows)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser {
    pub sheet_name: Option<String>,
}

impl UniversalFileParser {
    pub fn new(sheet_name: Option<String>) -> Self {
        Self { sheet_name }
    }

    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRow>> {
        let path = file_path.as_ref();
        let ext = extension_of(path);

        match ext.as_str() {
            "csv" => CsvParser.parse_to_raw_rows(path),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelParser {
                sheet_name: self.sheet_name.clone(),
            }
            .parse_to_raw_rows(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let temp_file = csv_file(&[
            "Product,Model,SKU_Order,Color",
            "Widget,X1,Color,R|G",
            "Gadget,Y2,Color,B",
        ]);

        let rows = CsvParser.parse_to_raw_rows(temp_file.path()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].text("Product"), Some("Widget".to_string()));
        assert_eq!(rows[0].text("Color"), Some("R|G".to_string()));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_raw_rows(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let temp_file = csv_file(&["Product,Model", "Widget,X1", ",", "Gadget,Y2"]);

        let rows = CsvParser.parse_to_raw_rows(temp_file.path()).unwrap();

        assert_eq!(rows.len(), 2);
        // 行号保留源文件位置
        assert_eq!(rows[1].row_number, 4);
    }

    #[test]
    fn test_csv_blank_cell_is_missing() {
        let temp_file = csv_file(&["Product,Model,Size", "Widget,X1,"]);

        let rows = CsvParser.parse_to_raw_rows(temp_file.path()).unwrap();

        assert_eq!(rows[0].get("Size"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let temp_file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = UniversalFileParser::new(None).parse(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_excel_cell_mapping() {
        assert_eq!(ExcelParser::cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(ExcelParser::cell_value(&Data::Int(5)), CellValue::Number(5.0));
        assert_eq!(
            ExcelParser::cell_value(&Data::String(" R|G ".to_string())),
            CellValue::Text("R|G".to_string())
        );
    }

    #[test]
    fn test_pick_sheet_falls_back_to_first() {
        let parser = ExcelParser::new("Raw Data");
        let names = vec!["Sheet1".to_string(), "Other".to_string()];
        assert_eq!(parser.pick_sheet(&names).unwrap(), "Sheet1");

        let names = vec!["Sheet1".to_string(), "Raw Data".to_string()];
        assert_eq!(parser.pick_sheet(&names).unwrap(), "Raw Data");

        assert!(matches!(
            parser.pick_sheet(&[]),
            Err(ImportError::SheetNotFound(_))
        ));
    }
}
