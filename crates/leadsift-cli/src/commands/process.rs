use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{archive_path, plural, reason_counts};
use anyhow::{Context as _, Result};
use clap::Args;
use leadsift_core::rules::parse_batch_size;
use leadsift_core::{aggregate, JobId, RejectionReason, RunStatistics};
use leadsift_sheets::{write_package_file, SheetFile};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input sheet: csv, xlsx, xlsm, xlsb, xls or ods
    pub file: PathBuf,
    /// Leads per output file, clamped to 1..=100000; non-numeric values use the configured default
    #[arg(long)]
    pub batch_size: Option<String>,
    /// Archive path; defaults to processed_leads_<job-id>.zip in the output directory
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Directory for the generated archive (overrides output_dir from config)
    #[arg(long, conflicts_with = "out")]
    pub out_dir: Option<PathBuf>,
    /// Classify and count rows without writing an archive
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
struct ProcessReport {
    job_id: JobId,
    input: String,
    archive: Option<String>,
    batch_size: usize,
    dry_run: bool,
    stats: RunStatistics,
    rejection_reasons: BTreeMap<RejectionReason, usize>,
}

pub fn process(ctx: &Context<'_>, args: ProcessArgs) -> Result<()> {
    if let Some(out) = &args.out {
        if out.is_dir() {
            return Err(invalid_input(format!(
                "--out must be a file path, {} is a directory",
                out.display()
            )));
        }
    }

    let batch_size = parse_batch_size(args.batch_size.as_deref(), ctx.config.batch_size);
    debug!(batch_size, "batch size resolved");

    let sheet = SheetFile::open(&args.file, ctx.config.max_input_bytes)
        .with_context(|| format!("open input {}", args.file.display()))?;
    debug!(
        path = %sheet.path().display(),
        format = sheet.format().as_str(),
        bytes = sheet.size(),
        "input accepted"
    );
    let rows = sheet
        .rows()
        .with_context(|| format!("read input {}", args.file.display()))?;
    let report = aggregate(rows, batch_size)
        .with_context(|| format!("read rows from {}", args.file.display()))?;
    info!(
        total_rows = report.stats.total_rows,
        valid = report.stats.valid_leads,
        rejected = report.stats.rejected,
        batches = report.stats.batches,
        "rows classified"
    );

    let job_id = JobId::new();
    let archive = if args.dry_run {
        None
    } else {
        let out_dir = args.out_dir.unwrap_or_else(|| ctx.config.output_dir());
        let path = archive_path(args.out, &out_dir, &job_id);
        write_package_file(&path, &report.batches, &report.rejections)
            .with_context(|| format!("write archive {}", path.display()))?;
        info!(path = %path.display(), "archive written");
        Some(path)
    };

    let result = ProcessReport {
        job_id,
        input: args.file.display().to_string(),
        archive: archive.as_ref().map(|path| path.display().to_string()),
        batch_size,
        dry_run: args.dry_run,
        stats: report.stats,
        rejection_reasons: reason_counts(&report.rejections),
    };

    if ctx.json {
        return print_json(&result);
    }

    let stats = result.stats;
    println!(
        "Processed {}: {}, {} valid, {} rejected, {}",
        result.input,
        plural(stats.total_rows, "row", "rows"),
        stats.valid_leads,
        stats.rejected,
        plural(stats.batches, "batch file", "batch files"),
    );
    if stats.valid_leads == 0 {
        println!("No valid leads found.");
    }
    match &result.archive {
        Some(path) => println!("Archive written to {}", path),
        None => println!("Dry run: no archive written"),
    }
    if !result.rejection_reasons.is_empty() {
        println!("Rejections:");
        for (reason, count) in &result.rejection_reasons {
            println!("- {} ({}): {}", reason, reason.as_str(), count);
        }
    }
    Ok(())
}
