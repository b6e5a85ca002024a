use crate::columns::resolve_columns;
use crate::domain::lead::Lead;
use crate::domain::phone::normalize_phone_cell;
use crate::domain::rejection::RejectionReason;
use crate::domain::row::Row;

/// The verdict for a single row, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted(Lead),
    Rejected {
        reason: RejectionReason,
        original_value: String,
    },
}

pub fn classify_row(row: &Row) -> RowOutcome {
    let columns = resolve_columns(row.columns());
    let raw_name = columns.name.and_then(|column| row.get(column)).unwrap_or("");
    let raw_phone = columns.phone.and_then(|column| row.get(column)).unwrap_or("");

    let has_name = !raw_name.is_empty();
    let has_phone = !raw_phone.is_empty();

    match (has_name, has_phone) {
        (false, false) => rejected(RejectionReason::MissingNameAndMobile, raw_phone),
        (true, false) => rejected(RejectionReason::MobileColumnEmpty, raw_phone),
        (_, true) => match normalize_phone_cell(raw_phone) {
            Ok(phone) => RowOutcome::Accepted(Lead::new(raw_name, phone)),
            Err(rejection) => rejected(rejection.reason, raw_phone),
        },
    }
}

fn rejected(reason: RejectionReason, raw_phone: &str) -> RowOutcome {
    RowOutcome::Rejected {
        reason,
        original_value: raw_phone.to_string(),
    }
}
