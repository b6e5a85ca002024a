use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported file type: {0} (expected csv, xlsx, xlsm, xlsb, xls or ods)")]
    UnsupportedFormat(PathBuf),
    #[error("input file {path} is {size} bytes, limit is {limit}")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
    #[error("no worksheet found in {0}")]
    NoWorksheet(PathBuf),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
