use leadsift_core::{JobId, Rejection, RejectionReason};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub fn archive_path(out: Option<PathBuf>, out_dir: &Path, job_id: &JobId) -> PathBuf {
    match out {
        Some(path) => path,
        None => out_dir.join(job_id.archive_file_name()),
    }
}

/// Rejection counts per reason, in declaration order.
pub fn reason_counts(rejections: &[Rejection]) -> BTreeMap<RejectionReason, usize> {
    let mut counts = BTreeMap::new();
    for rejection in rejections {
        *counts.entry(rejection.reason).or_insert(0) += 1;
    }
    counts
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
