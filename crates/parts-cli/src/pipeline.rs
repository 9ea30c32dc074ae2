//! Conversion pipeline: read, normalize, synthesize, write.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use tempfile::NamedTempFile;
use tracing::{info, info_span, warn};

use parts_ingest::{CanonicalTable, normalize, read_raw_table};
use parts_model::SynthesisOptions;
use parts_transform::{OutputTable, transform_with_options};

use crate::types::ConversionSummary;

/// Context attached to every failure after input validation.
pub const PROCESSING_ERROR: &str = "Error processing file";
const OUTPUT_PREFIX: &str = "amazon_auto_parts_";

/// Where the upload file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Exact file path.
    File(PathBuf),
    /// Directory receiving a timestamped file.
    Directory(PathBuf),
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::Directory(PathBuf::from("."))
    }
}

/// Options for one `convert` run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub output: OutputTarget,
    /// Also write the cleaned canonical table here.
    pub emit_canonical: Option<PathBuf>,
    /// Run every stage but write nothing.
    pub dry_run: bool,
    pub synthesis: SynthesisOptions,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_emit_canonical(mut self, path: Option<PathBuf>) -> Self {
        self.emit_canonical = path;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn with_synthesis(mut self, synthesis: SynthesisOptions) -> Self {
        self.synthesis = synthesis;
        self
    }
}

/// In-memory result of converting one listing.
#[derive(Debug)]
pub struct Conversion {
    pub canonical: CanonicalTable,
    pub output: OutputTable,
    pub blank_rows_dropped: usize,
}

/// Name of the upload file written at `timestamp`.
pub fn output_file_name(timestamp: DateTime<Local>) -> String {
    format!("{OUTPUT_PREFIX}{}.csv", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Rejects inputs without a `.csv` extension.
pub fn ensure_csv_input(path: &Path) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        bail!("Only CSV files are accepted");
    }
    Ok(())
}

/// Normalizes and synthesizes listing bytes without touching the filesystem.
pub fn convert_bytes(bytes: &[u8], options: &SynthesisOptions) -> Result<Conversion> {
    let (canonical, raw_rows) = {
        let _span = info_span!("ingest", bytes = bytes.len()).entered();
        let raw = read_raw_table(bytes).context("read listing")?;
        (normalize(&raw).context("normalize listing")?, raw.height())
    };
    let output = {
        let _span = info_span!("transform", rows = canonical.height()).entered();
        transform_with_options(&canonical, options).context("synthesize upload rows")?
    };
    Ok(Conversion {
        blank_rows_dropped: raw_rows.saturating_sub(canonical.height()),
        canonical,
        output,
    })
}

/// Converts one listing file, writing the upload file unless `dry_run` is set.
///
/// Nothing is written when any stage fails.
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<ConversionSummary> {
    ensure_csv_input(input)?;
    run_conversion(input, options).context(PROCESSING_ERROR)
}

fn run_conversion(input: &Path, options: &ConvertOptions) -> Result<ConversionSummary> {
    let bytes =
        std::fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let conversion = convert_bytes(&bytes, &options.synthesis)?;

    let _span = info_span!("output", dry_run = options.dry_run).entered();
    let output_path = resolve_output_path(&options.output);
    let mut canonical_path = None;
    let mut written_path = None;
    if !options.dry_run {
        let upload = conversion
            .output
            .to_csv_bytes()
            .context("serialize upload file")?;
        let mut files = vec![(output_path.clone(), upload)];
        if let Some(path) = &options.emit_canonical {
            let canonical = conversion
                .canonical
                .to_csv_bytes()
                .context("serialize canonical table")?;
            files.push((path.clone(), canonical));
        }
        publish(&files)?;
        info!(path = %output_path.display(), rows = conversion.output.height(), "wrote upload file");
        written_path = Some(output_path);
        canonical_path = options.emit_canonical.clone();
    }

    Ok(summarize(input, &conversion, written_path, canonical_path, options.dry_run))
}

/// Writes each file to a temporary sibling, then renames them into place once
/// every file has been written. Files already renamed are removed if a later
/// rename fails.
fn publish(files: &[(PathBuf, Vec<u8>)]) -> Result<()> {
    let mut staged = Vec::with_capacity(files.len());
    for (path, bytes) in files {
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("write {}", path.display()))?;
        temp.write_all(bytes)
            .with_context(|| format!("write {}", path.display()))?;
        staged.push((temp, path));
    }

    let mut published: Vec<&Path> = Vec::with_capacity(staged.len());
    for (temp, path) in staged {
        if let Err(error) = temp.persist(path) {
            for done in &published {
                if let Err(cleanup) = std::fs::remove_file(done) {
                    warn!(path = %done.display(), %cleanup, "failed to remove partial output");
                }
            }
            return Err(anyhow::Error::new(error.error).context(format!("write {}", path.display())));
        }
        published.push(path);
    }
    Ok(())
}

fn resolve_output_path(target: &OutputTarget) -> PathBuf {
    match target {
        OutputTarget::File(path) => path.clone(),
        OutputTarget::Directory(dir) => dir.join(output_file_name(Local::now())),
    }
}

fn summarize(
    input: &Path,
    conversion: &Conversion,
    output_path: Option<PathBuf>,
    canonical_path: Option<PathBuf>,
    dry_run: bool,
) -> ConversionSummary {
    ConversionSummary {
        input: input.to_path_buf(),
        rows_processed: conversion.canonical.height(),
        rows_output: conversion.output.height(),
        blank_rows_dropped: conversion.blank_rows_dropped,
        mapped_fields: conversion
            .canonical
            .mapped_fields()
            .into_iter()
            .map(|field| field.as_str().to_string())
            .collect(),
        unmapped_columns: conversion
            .canonical
            .unmapped_columns()
            .into_iter()
            .map(str::to_string)
            .collect(),
        has_fitment: conversion.output.has_fitment(),
        output_path,
        canonical_path,
        dry_run,
    }
}
