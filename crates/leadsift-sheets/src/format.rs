use crate::error::{Result, SheetError};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    /// Any spreadsheet container calamine can open (xlsx, xlsm, xlsb, xls, ods).
    Workbook,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| SheetError::UnsupportedFormat(path.to_path_buf()))?;

        match extension.as_str() {
            "csv" => Ok(SheetFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SheetFormat::Workbook),
            _ => Err(SheetError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SheetFormat::Csv => "csv",
            SheetFormat::Workbook => "workbook",
        }
    }
}
