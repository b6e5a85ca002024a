use crate::domain::row::Row;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionReason {
    EmptyValue,
    InvalidLengthOrFormat,
    InvalidPattern,
    MissingNameAndMobile,
    MobileColumnEmpty,
}

impl RejectionReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            RejectionReason::EmptyValue => "empty-value",
            RejectionReason::InvalidLengthOrFormat => "invalid-length-or-format",
            RejectionReason::InvalidPattern => "invalid-pattern",
            RejectionReason::MissingNameAndMobile => "missing-name-and-mobile",
            RejectionReason::MobileColumnEmpty => "mobile-column-empty",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            RejectionReason::EmptyValue => "Empty value",
            RejectionReason::InvalidLengthOrFormat => "Invalid length or format",
            RejectionReason::InvalidPattern => "Invalid Indian mobile pattern",
            RejectionReason::MissingNameAndMobile => "Missing Name and Mobile column data",
            RejectionReason::MobileColumnEmpty => "Mobile column empty",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Why one input row produced no lead, with enough context to fix the source sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Spreadsheet row number, counting the header as row 1.
    pub row_number: usize,
    pub reason: RejectionReason,
    pub original_value: String,
    pub available_columns: Vec<String>,
    pub data: Row,
}

#[cfg(test)]
mod tests {
    use super::{Rejection, RejectionReason};
    use crate::domain::row::Row;

    const REASONS: [RejectionReason; 5] = [
        RejectionReason::EmptyValue,
        RejectionReason::InvalidLengthOrFormat,
        RejectionReason::InvalidPattern,
        RejectionReason::MissingNameAndMobile,
        RejectionReason::MobileColumnEmpty,
    ];

    #[test]
    fn serialized_code_matches_as_str() {
        for reason in REASONS {
            let json = serde_json::to_value(reason).expect("serialize reason");
            assert_eq!(json, reason.as_str());
        }
    }

    #[test]
    fn display_uses_description() {
        assert_eq!(
            RejectionReason::InvalidPattern.to_string(),
            "Invalid Indian mobile pattern"
        );
        assert_eq!(
            RejectionReason::MobileColumnEmpty.to_string(),
            "Mobile column empty"
        );
    }

    #[test]
    fn reasons_order_by_declaration() {
        assert!(RejectionReason::EmptyValue < RejectionReason::InvalidPattern);
        assert!(RejectionReason::MissingNameAndMobile < RejectionReason::MobileColumnEmpty);
    }

    #[test]
    fn rejection_serializes_row_data() {
        let rejection = Rejection {
            row_number: 4,
            reason: RejectionReason::InvalidPattern,
            original_value: "123".to_string(),
            available_columns: vec!["ContactName".to_string(), "Phone2".to_string()],
            data: [("ContactName", "C"), ("Phone2", "123")].into_iter().collect::<Row>(),
        };
        let json = serde_json::to_value(&rejection).expect("serialize rejection");
        assert_eq!(json["row_number"], 4);
        assert_eq!(json["reason"], "invalid-pattern");
        assert_eq!(json["data"]["ContactName"], "C");
        assert_eq!(json["available_columns"][1], "Phone2");
    }
}
