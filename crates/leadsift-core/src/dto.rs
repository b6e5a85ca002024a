use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunStatistics {
    pub total_rows: usize,
    pub valid_leads: usize,
    pub rejected: usize,
    pub batches: usize,
}
