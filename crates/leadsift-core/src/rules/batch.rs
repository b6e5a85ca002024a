use crate::domain::lead::{Batch, Lead};
use crate::error::CoreError;

pub const DEFAULT_BATCH_SIZE: usize = 1000;
pub const MIN_BATCH_SIZE: usize = 1;
pub const MAX_BATCH_SIZE: usize = 100_000;

pub fn clamp_batch_size(requested: i64) -> usize {
    requested.clamp(MIN_BATCH_SIZE as i64, MAX_BATCH_SIZE as i64) as usize
}

pub fn validate_batch_size(value: i64) -> Result<usize, CoreError> {
    if value < MIN_BATCH_SIZE as i64 || value > MAX_BATCH_SIZE as i64 {
        return Err(CoreError::InvalidBatchSize(value));
    }
    Ok(value as usize)
}

/// Reads a caller-supplied batch size. Leading integer text is honored ("250 rows" is 250);
/// absent, non-numeric or zero input falls back. The result is always clamped.
pub fn parse_batch_size(raw: Option<&str>, fallback: usize) -> usize {
    let fallback = fallback.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE);
    match raw.and_then(leading_integer) {
        None | Some(0) => fallback,
        Some(value) => clamp_batch_size(value),
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Splits leads into contiguous batches numbered from 1, preserving order.
pub fn chunk_leads(leads: Vec<Lead>, batch_size: usize) -> Vec<Batch> {
    let size = batch_size.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE);
    let mut batches = Vec::with_capacity(leads.len().div_ceil(size));
    let mut remaining = leads.into_iter().peekable();
    while remaining.peek().is_some() {
        let leads: Vec<Lead> = remaining.by_ref().take(size).collect();
        batches.push(Batch {
            number: batches.len() + 1,
            leads,
        });
    }
    batches
}
