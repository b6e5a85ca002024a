use crate::error::{Result, SheetError};
use crate::header::{build_row, column_names};
use calamine::{open_workbook_auto, Data, Reader};
use leadsift_core::Row;
use std::path::Path;
use tracing::debug;

/// Largest magnitude at which a whole float still prints as an exact integer.
const MAX_EXACT_INTEGER: f64 = 1e15;

/// Reads every non-blank data row from the first worksheet.
pub fn workbook_rows(path: &Path) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::NoWorksheet(path.to_path_buf()))??;

    let mut rows = range.rows();
    let columns = match rows.next() {
        Some(header) => column_names(header.iter().map(cell_text)),
        None => Vec::new(),
    };
    debug!(columns = columns.len(), "worksheet header read");

    Ok(rows
        .map(|cells| build_row(&columns, cells.iter().map(cell_text)))
        .filter(|row| !row.is_blank())
        .collect())
}

/// Renders a cell the way it reads in the sheet: whole numbers without a fraction.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_number(*value),
        Data::Bool(value) => value.to_string(),
        other => other.to_string(),
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
