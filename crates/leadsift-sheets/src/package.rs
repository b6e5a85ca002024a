//! Zip packaging: one CSV per batch plus `rejected.json` when anything was rejected.

use crate::error::Result;
use leadsift_core::{Batch, Rejection};
use std::fs;
use std::io::{Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const REJECTIONS_FILE: &str = "rejected.json";
pub const BATCH_EXTENSION: &str = "csv";

pub struct PackageWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    entries: Vec<String>,
}

impl<W: Write + Seek> PackageWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            zip: ZipWriter::new(inner),
            entries: Vec::new(),
        }
    }

    pub fn add_batch(&mut self, batch: &Batch) -> Result<()> {
        let name = format!("{}.{}", batch.file_stem(), BATCH_EXTENSION);
        self.zip.start_file(name.as_str(), entry_options())?;
        {
            let mut writer = csv::Writer::from_writer(&mut self.zip);
            for lead in &batch.leads {
                writer.serialize(lead)?;
            }
            writer.flush()?;
        }
        debug!(entry = %name, leads = batch.len(), "batch packaged");
        self.entries.push(name);
        Ok(())
    }

    /// Writes the rejection report. Returns false (and writes nothing) when there is none.
    pub fn add_rejections(&mut self, rejections: &[Rejection]) -> Result<bool> {
        if rejections.is_empty() {
            return Ok(false);
        }
        self.zip.start_file(REJECTIONS_FILE, entry_options())?;
        serde_json::to_writer_pretty(&mut self.zip, rejections)?;
        debug!(rejections = rejections.len(), "rejection report packaged");
        self.entries.push(REJECTIONS_FILE.to_string());
        Ok(true)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn finish(self) -> Result<W> {
        Ok(self.zip.finish()?)
    }
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

pub fn write_package<W: Write + Seek>(
    inner: W,
    batches: &[Batch],
    rejections: &[Rejection],
) -> Result<W> {
    let mut package = PackageWriter::new(inner);
    for batch in batches {
        package.add_batch(batch)?;
    }
    package.add_rejections(rejections)?;
    debug!(entries = ?package.entries(), "package complete");
    package.finish()
}

/// Writes the archive next to `path` and renames it into place, so a failed run
/// never leaves a partial archive behind.
pub fn write_package_file(path: &Path, batches: &[Batch], rejections: &[Rejection]) -> Result<()> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    let mut temp = write_package(temp, batches, rejections)?;
    temp.flush()?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
