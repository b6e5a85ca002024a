use crate::domain::lead::{Batch, Lead};
use crate::domain::phone::CanonicalPhone;
use crate::domain::rejection::{Rejection, RejectionReason};
use crate::domain::row::Row;
use crate::dto::RunStatistics;
use crate::rules::batch::chunk_leads;
use crate::rules::classify::{classify_row, RowOutcome};
use std::collections::HashSet;

/// Offset from a row's 0-based data index to its spreadsheet row number (header is row 1).
pub const HEADER_ROW_OFFSET: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDisposition {
    Added,
    /// Valid phone already seen earlier in the run; absorbed without a rejection.
    Duplicate,
    Rejected(RejectionReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    pub batches: Vec<Batch>,
    pub rejections: Vec<Rejection>,
    pub stats: RunStatistics,
}

/// Per-run state: the dedup set, accepted leads in first-seen order, and rejections.
/// Create one per run; nothing is shared between runs.
#[derive(Debug, Default)]
pub struct LeadAggregator {
    seen: HashSet<CanonicalPhone>,
    leads: Vec<Lead>,
    rejections: Vec<Rejection>,
    total_rows: usize,
}

impl LeadAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: Row) -> RowDisposition {
        let row_number = self.total_rows + HEADER_ROW_OFFSET;
        self.total_rows += 1;

        match classify_row(&row) {
            RowOutcome::Accepted(lead) => {
                if self.seen.insert(lead.phone.clone()) {
                    self.leads.push(lead);
                    RowDisposition::Added
                } else {
                    RowDisposition::Duplicate
                }
            }
            RowOutcome::Rejected {
                reason,
                original_value,
            } => {
                self.rejections.push(Rejection {
                    row_number,
                    reason,
                    original_value,
                    available_columns: row.column_names(),
                    data: row,
                });
                RowDisposition::Rejected(reason)
            }
        }
    }

    pub fn finish(self, batch_size: usize) -> AggregateReport {
        let valid_leads = self.leads.len();
        let batches = chunk_leads(self.leads, batch_size);
        let stats = RunStatistics {
            total_rows: self.total_rows,
            valid_leads,
            rejected: self.rejections.len(),
            batches: batches.len(),
        };
        AggregateReport {
            batches,
            rejections: self.rejections,
            stats,
        }
    }
}

/// Runs a whole row source through a fresh aggregator. A source error aborts the run.
pub fn aggregate<I, E>(rows: I, batch_size: usize) -> Result<AggregateReport, E>
where
    I: IntoIterator<Item = Result<Row, E>>,
{
    let mut aggregator = LeadAggregator::new();
    for row in rows {
        aggregator.push(row?);
    }
    Ok(aggregator.finish(batch_size))
}
