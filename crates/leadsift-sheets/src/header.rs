use leadsift_core::Row;
use std::collections::HashSet;

const BLANK_HEADER: &str = "__EMPTY";

/// Turns a raw header row into unique column names. Blank headers become `__EMPTY`
/// and repeats get `_1`, `_2`, ... suffixes, in column order.
pub fn column_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut used = HashSet::new();
    let mut names = Vec::new();
    for cell in raw {
        let cell = cell.as_ref();
        let base = if cell.trim().is_empty() {
            BLANK_HEADER
        } else {
            cell
        };
        let mut name = base.to_string();
        let mut suffix = 1;
        while used.contains(&name) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }
        used.insert(name.clone());
        names.push(name);
    }
    names
}

/// Builds a row for the given header. Missing trailing cells become empty strings;
/// cells past the header are dropped.
pub fn build_row<I, S>(columns: &[String], cells: I) -> Row
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut row = Row::with_capacity(columns.len());
    let mut cells = cells.into_iter();
    for column in columns {
        let value = cells.next().map(Into::into).unwrap_or_default();
        row.push(column.clone(), value);
    }
    row
}
