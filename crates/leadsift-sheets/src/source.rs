use crate::csv_source::CsvRows;
use crate::error::{Result, SheetError};
use crate::format::SheetFormat;
use crate::workbook::workbook_rows;
use leadsift_core::Row;
use std::fs;
use std::path::{Path, PathBuf};

pub type RowIter = Box<dyn Iterator<Item = Result<Row>>>;

/// An input sheet that passed the type and size checks.
#[derive(Debug, Clone)]
pub struct SheetFile {
    path: PathBuf,
    format: SheetFormat,
    size: u64,
}

impl SheetFile {
    pub fn open(path: &Path, max_bytes: u64) -> Result<Self> {
        let format = SheetFormat::from_path(path)?;
        let size = fs::metadata(path)?.len();
        if size > max_bytes {
            return Err(SheetError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: max_bytes,
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            format,
            size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SheetFormat {
        self.format
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Data rows in source order, header excluded. Fully blank rows are skipped.
    pub fn rows(&self) -> Result<RowIter> {
        match self.format {
            SheetFormat::Csv => {
                let bytes = fs::read(&self.path)?;
                Ok(Box::new(CsvRows::from_bytes(bytes)?))
            }
            SheetFormat::Workbook => {
                let rows = workbook_rows(&self.path)?;
                Ok(Box::new(rows.into_iter().map(Ok)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SheetFile;
    use crate::error::SheetError;
    use crate::format::SheetFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_csv_file() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("leads.csv");
        fs::write(&path, "ContactName,Phone2\nAsha,9876543210\n").expect("write csv");

        let rows: Vec<_> = SheetFile::open(&path, 1024)
            .expect("open")
            .rows()
            .expect("rows")
            .collect::<Result<_, _>>()
            .expect("read rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Phone2"), Some("9876543210"));
    }

    #[test]
    fn rejects_oversized_input() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("leads.csv");
        fs::write(&path, "ContactName,Phone2\nAsha,9876543210\n").expect("write csv");

        let err = SheetFile::open(&path, 8).unwrap_err();
        assert!(matches!(err, SheetError::TooLarge { limit: 8, .. }));
    }

    #[test]
    fn rejects_unsupported_extension_before_reading() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("leads.txt");

        let err = SheetFile::open(&path, 1024).unwrap_err();
        assert!(matches!(err, SheetError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().expect("tempdir");
        let err = SheetFile::open(&temp.path().join("missing.csv"), 1024).unwrap_err();
        assert!(matches!(err, SheetError::Io(_)));
    }

    #[test]
    fn open_records_format_and_size() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("leads.CSV");
        fs::write(&path, "a\n").expect("write csv");

        let sheet = SheetFile::open(&path, 1024).expect("open");
        assert_eq!(sheet.format(), SheetFormat::Csv);
        assert_eq!(sheet.size(), 2);
        assert_eq!(sheet.path(), path.as_path());
    }
}
