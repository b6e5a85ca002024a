use crate::domain::rejection::RejectionReason;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

pub const COUNTRY_CODE: &str = "91";
pub const CANDIDATE_DELIMITERS: [char; 5] = [',', '/', '|', '&', '\n'];

static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^91[6-9][0-9]{9}$").expect("mobile pattern is valid"));

/// A validated Indian mobile number: `91` followed by ten digits starting 6-9.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalPhone(String);

impl CanonicalPhone {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}: {original:?}")]
pub struct PhoneRejection {
    pub reason: RejectionReason,
    pub original: String,
}

impl PhoneRejection {
    fn new(reason: RejectionReason, original: &str) -> Self {
        Self {
            reason,
            original: original.to_string(),
        }
    }
}

pub fn normalize_phone(raw: &str) -> Result<CanonicalPhone, PhoneRejection> {
    if raw.trim().is_empty() {
        return Err(PhoneRejection::new(RejectionReason::EmptyValue, raw));
    }

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    let candidate = match digits.len() {
        10 => format!("{COUNTRY_CODE}{digits}"),
        11 if digits.starts_with('0') => format!("{COUNTRY_CODE}{}", &digits[1..]),
        12 if digits.starts_with(COUNTRY_CODE) => digits,
        _ => {
            return Err(PhoneRejection::new(
                RejectionReason::InvalidLengthOrFormat,
                raw,
            ))
        }
    };

    if !MOBILE_PATTERN.is_match(&candidate) {
        return Err(PhoneRejection::new(RejectionReason::InvalidPattern, raw));
    }

    Ok(CanonicalPhone(candidate))
}

/// Splits a phone cell into trimmed candidates. Runs of delimiters count as one,
/// so empty candidates only appear when the cell starts or ends with a delimiter.
pub fn split_candidates(raw: &str) -> Vec<&str> {
    let pieces: Vec<&str> = raw.split(CANDIDATE_DELIMITERS).collect();
    let last = pieces.len().saturating_sub(1);
    pieces
        .into_iter()
        .enumerate()
        .filter(|(index, piece)| *index == 0 || *index == last || !piece.is_empty())
        .map(|(_, piece)| piece.trim())
        .collect()
}

/// Tries each candidate of a phone cell left to right and returns the first that
/// normalizes. When none does, the failure of the last candidate is returned.
pub fn normalize_phone_cell(raw: &str) -> Result<CanonicalPhone, PhoneRejection> {
    let mut last_failure = None;
    for candidate in split_candidates(raw) {
        match normalize_phone(candidate) {
            Ok(phone) => return Ok(phone),
            Err(rejection) => last_failure = Some(rejection),
        }
    }
    Err(last_failure.unwrap_or_else(|| PhoneRejection::new(RejectionReason::EmptyValue, raw)))
}

#[cfg(test)]
mod tests {
    use super::{normalize_phone, normalize_phone_cell, split_candidates};
    use crate::domain::rejection::RejectionReason;

    fn reason(raw: &str) -> RejectionReason {
        normalize_phone(raw).unwrap_err().reason
    }

    #[test]
    fn ten_digits_gain_country_code() {
        let phone = normalize_phone("9876543210").unwrap();
        assert_eq!(phone.as_str(), "919876543210");
    }

    #[test]
    fn strips_formatting_characters() {
        let phone = normalize_phone("+91 (98765) 43-210").unwrap();
        assert_eq!(phone.as_str(), "919876543210");
    }

    #[test]
    fn eleven_digits_with_trunk_zero() {
        let phone = normalize_phone("09876543210").unwrap();
        assert_eq!(phone.as_str(), "919876543210");
    }

    #[test]
    fn eleven_digits_without_trunk_zero_rejected() {
        assert_eq!(reason("19876543210"), RejectionReason::InvalidLengthOrFormat);
    }

    #[test]
    fn twelve_digits_need_country_code() {
        assert_eq!(reason("449876543210"), RejectionReason::InvalidLengthOrFormat);
    }

    #[test]
    fn canonical_value_is_unchanged() {
        let once = normalize_phone("919876543210").unwrap();
        let twice = normalize_phone(once.as_str()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.as_str(), "919876543210");
    }

    #[test]
    fn leading_digit_outside_six_to_nine_rejected() {
        assert_eq!(reason("5876543210"), RejectionReason::InvalidPattern);
        assert_eq!(reason("915876543210"), RejectionReason::InvalidPattern);
        assert_eq!(reason("05876543210"), RejectionReason::InvalidPattern);
    }

    #[test]
    fn every_ten_digit_leading_class() {
        for lead in 0..10u8 {
            let raw = format!("{lead}876543210");
            let result = normalize_phone(&raw);
            if lead >= 6 {
                assert_eq!(result.unwrap().as_str(), format!("91{raw}"));
            } else {
                assert_eq!(result.unwrap_err().reason, RejectionReason::InvalidPattern);
            }
        }
    }

    #[test]
    fn wrong_lengths_rejected() {
        assert_eq!(reason("12345"), RejectionReason::InvalidLengthOrFormat);
        assert_eq!(reason("1234567890123"), RejectionReason::InvalidLengthOrFormat);
        assert_eq!(reason("abc"), RejectionReason::InvalidLengthOrFormat);
    }

    #[test]
    fn empty_and_blank_values_rejected() {
        assert_eq!(reason(""), RejectionReason::EmptyValue);
        assert_eq!(reason("   "), RejectionReason::EmptyValue);
    }

    #[test]
    fn rejection_keeps_original_value() {
        let rejection = normalize_phone("98-76").unwrap_err();
        assert_eq!(rejection.original, "98-76");
    }

    #[test]
    fn split_collapses_delimiter_runs() {
        assert_eq!(
            split_candidates("98765 43210, 91234/ 7000000000"),
            vec!["98765 43210", "91234", "7000000000"]
        );
        assert_eq!(split_candidates("a,,|b"), vec!["a", "b"]);
        assert_eq!(split_candidates("a & b\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_keeps_edge_empties() {
        assert_eq!(split_candidates(",a"), vec!["", "a"]);
        assert_eq!(split_candidates("a,"), vec!["a", ""]);
        assert_eq!(split_candidates(""), vec![""]);
    }

    #[test]
    fn cell_uses_first_valid_candidate() {
        let phone = normalize_phone_cell("9876543210,abc").unwrap();
        assert_eq!(phone.as_str(), "919876543210");

        let phone = normalize_phone_cell("123 / 7012345678 / 9876543210").unwrap();
        assert_eq!(phone.as_str(), "917012345678");
    }

    #[test]
    fn cell_reports_last_failure() {
        let rejection = normalize_phone_cell("5876543210, 123").unwrap_err();
        assert_eq!(rejection.reason, RejectionReason::InvalidLengthOrFormat);
        assert_eq!(rejection.original, "123");

        let rejection = normalize_phone_cell("123 | 5876543210").unwrap_err();
        assert_eq!(rejection.reason, RejectionReason::InvalidPattern);

        let rejection = normalize_phone_cell("123,").unwrap_err();
        assert_eq!(rejection.reason, RejectionReason::EmptyValue);
    }
}
