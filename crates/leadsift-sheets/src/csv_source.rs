use crate::error::{Result, SheetError};
use crate::header::{build_row, column_names};
use csv::{ReaderBuilder, StringRecordsIntoIter};
use encoding_rs::WINDOWS_1252;
use leadsift_core::Row;
use std::io::Cursor;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Streams rows from CSV bytes. The first record is the header.
pub struct CsvRows {
    records: StringRecordsIntoIter<Cursor<Vec<u8>>>,
    columns: Vec<String>,
}

impl CsvRows {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let bytes = decode(bytes);
        let mut records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(Cursor::new(bytes))
            .into_records();

        let columns = match records.next() {
            Some(header) => column_names(header?.iter()),
            None => Vec::new(),
        };
        debug!(columns = columns.len(), "csv header read");

        Ok(Self { records, columns })
    }
}

impl Iterator for CsvRows {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(err) => return Some(Err(SheetError::Csv(err))),
            };
            let row = build_row(&self.columns, record.iter());
            if row.is_blank() {
                continue;
            }
            return Some(Ok(row));
        }
    }
}

/// UTF-8 (with or without BOM) passes through; anything else is read as Windows-1252.
fn decode(bytes: Vec<u8>) -> Vec<u8> {
    let bytes = if bytes.starts_with(UTF8_BOM) {
        bytes[UTF8_BOM.len()..].to_vec()
    } else {
        bytes
    };
    if std::str::from_utf8(&bytes).is_ok() {
        return bytes;
    }
    debug!("csv input is not utf-8, decoding as windows-1252");
    let (decoded, _, _) = WINDOWS_1252.decode(&bytes);
    decoded.into_owned().into_bytes()
}

#[cfg(test)]
mod tests {
    use super::CsvRows;
    use leadsift_core::Row;

    fn rows(data: &[u8]) -> Vec<Row> {
        CsvRows::from_bytes(data.to_vec())
            .expect("open csv")
            .collect::<Result<Vec<_>, _>>()
            .expect("read rows")
    }

    #[test]
    fn reads_rows_by_header() {
        let rows = rows(b"ContactName,Phone2\nAsha,9876543210\nRavi,\"98765 43211, 7012345678\"\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("ContactName"), Some("Asha"));
        assert_eq!(rows[1].get("Phone2"), Some("98765 43211, 7012345678"));
    }

    #[test]
    fn short_rows_get_empty_cells() {
        let rows = rows(b"ContactName,Phone2,City\nAsha\n");
        assert_eq!(rows[0].get("Phone2"), Some(""));
        assert_eq!(rows[0].get("City"), Some(""));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let rows = rows(b"ContactName,Phone2\n,\nAsha,9876543210\n,\n");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn whitespace_rows_are_kept() {
        let rows = rows(b"ContactName,Phone2\n , \nAsha,9876543210\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("ContactName"), Some(" "));
        assert_eq!(rows[0].get("Phone2"), Some(" "));
    }

    #[test]
    fn strips_bom_from_first_header() {
        let rows = rows(b"\xEF\xBB\xBFContactName,Phone2\nAsha,9876543210\n");
        assert_eq!(rows[0].get("ContactName"), Some("Asha"));
    }

    #[test]
    fn decodes_windows_1252() {
        let rows = rows(b"ContactName,Phone2\nJos\xE9,9876543210\n");
        assert_eq!(rows[0].get("ContactName"), Some("Jos\u{e9}"));
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(rows(b"").is_empty());
        assert!(rows(b"ContactName,Phone2\n").is_empty());
    }
}
