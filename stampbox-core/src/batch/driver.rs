use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::codec::ImageCodec;
use crate::batch::naming::{SuffixGenerator, randomized_file_name};
use crate::foundation::error::{StampError, StampResult};
use crate::pipeline::{PipelineOpts, process};
use crate::watermark::random::WatermarkRng;

/// Name of the output directory created next to the input root when none is given.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "handledImage";

/// Driver-level options.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchOpts {
    pub pipeline: PipelineOpts,
    /// Overwrite existing outputs. Ignored when `random_naming` is on.
    pub replace_old_file: bool,
    /// Append a random suffix to every output file name.
    pub random_naming: bool,
    /// Fresh suffixes tried before a randomized name collision is treated as "exists".
    pub max_name_attempts: u32,
}

impl Default for BatchOpts {
    fn default() -> Self {
        Self {
            pipeline: PipelineOpts::default(),
            replace_old_file: false,
            random_naming: true,
            max_name_attempts: 16,
        }
    }
}

/// Per-run counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct BatchReport {
    /// Images written.
    pub processed: usize,
    /// Files skipped because their output already exists.
    pub skipped: usize,
    /// Files that failed to decode, process or encode.
    pub failed: usize,
    /// Entries that are neither regular files nor directories.
    pub ignored: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed + self.skipped + self.failed + self.ignored
    }
}

/// `<parent of input>/handledImage`.
pub fn default_output_root(input_root: &Path) -> PathBuf {
    input_root
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(DEFAULT_OUTPUT_DIR_NAME)
}

/// Walks an input tree and writes a processed copy of every image under an output root.
pub struct BatchDriver<C: ImageCodec> {
    codec: C,
    opts: BatchOpts,
    rng: WatermarkRng,
    suffixes: SuffixGenerator,
}

struct Roots<'a> {
    input: &'a Path,
    output: &'a Path,
    output_canonical: Option<PathBuf>,
}

enum Target {
    Write(PathBuf),
    Exists(PathBuf),
}

impl<C: ImageCodec> BatchDriver<C> {
    pub fn new(codec: C, opts: BatchOpts, rng: WatermarkRng, suffixes: SuffixGenerator) -> Self {
        Self {
            codec,
            opts,
            rng,
            suffixes,
        }
    }

    pub fn opts(&self) -> &BatchOpts {
        &self.opts
    }

    /// Process every file below `input_root`, mirroring paths under `output_root`.
    ///
    /// Fails only when the roots themselves are unusable; per-file problems are
    /// logged and counted in the report.
    pub fn run(&mut self, input_root: &Path, output_root: &Path) -> StampResult<BatchReport> {
        if !input_root.is_dir() {
            return Err(StampError::invalid_input(format!(
                "'{}' does not exist or is not a directory",
                input_root.display()
            )));
        }
        fs::create_dir_all(output_root)
            .with_context(|| format!("create output dir '{}'", output_root.display()))?;

        let roots = Roots {
            input: input_root,
            output: output_root,
            output_canonical: fs::canonicalize(output_root).ok(),
        };
        tracing::info!(
            input = %input_root.display(),
            output = %output_root.display(),
            seed = self.rng.seed(),
            "starting batch"
        );

        let mut report = BatchReport::default();
        let entries = sorted_entries(input_root)
            .with_context(|| format!("read input dir '{}'", input_root.display()))?;
        self.walk_entries(entries, &roots, &mut report);

        tracing::info!(?report, "batch finished");
        Ok(report)
    }

    fn walk_dir(&mut self, dir: &Path, roots: &Roots<'_>, report: &mut BatchReport) {
        let canonical = fs::canonicalize(dir).ok();
        if canonical.is_some() && canonical == roots.output_canonical {
            tracing::debug!(dir = %dir.display(), "not descending into output root");
            return;
        }
        tracing::info!(dir = %dir.display(), "handling directory");
        match sorted_entries(dir) {
            Ok(entries) => self.walk_entries(entries, roots, report),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot read directory");
                report.failed += 1;
            }
        }
    }

    fn walk_entries(&mut self, entries: Vec<PathBuf>, roots: &Roots<'_>, report: &mut BatchReport) {
        for path in entries {
            let Ok(meta) = fs::symlink_metadata(&path) else {
                tracing::warn!(path = %path.display(), "cannot stat entry");
                report.ignored += 1;
                continue;
            };
            if meta.is_dir() {
                self.walk_dir(&path, roots, report);
            } else if path.is_file() {
                self.handle_file(&path, roots, report);
            } else {
                tracing::info!(path = %path.display(), "not a regular file");
                report.ignored += 1;
            }
        }
    }

    fn handle_file(&mut self, path: &Path, roots: &Roots<'_>, report: &mut BatchReport) {
        let out = match self.target_for(path, roots) {
            Ok(Target::Write(out)) => out,
            Ok(Target::Exists(out)) => {
                tracing::warn!(output = %out.display(), "already exists");
                report.skipped += 1;
                return;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot map output path");
                report.failed += 1;
                return;
            }
        };

        tracing::info!(input = %path.display(), output = %out.display(), "handling");
        match self.convert(path, &out) {
            Ok(()) => {
                tracing::info!(output = %out.display(), "finished");
                report.processed += 1;
            }
            Err(e) => {
                tracing::warn!(input = %path.display(), error = %e, "skipping file");
                report.failed += 1;
            }
        }
    }

    fn convert(&mut self, input: &Path, output: &Path) -> StampResult<()> {
        let source = self.codec.decode(input)?;
        let result = process(&source, &self.opts.pipeline, &mut self.rng)?;
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        self.codec.encode(&result, output)
    }

    fn target_for(&mut self, path: &Path, roots: &Roots<'_>) -> StampResult<Target> {
        let mirrored = self.mirrored_path(path, roots.input, roots.output)?;
        if !self.opts.random_naming {
            if mirrored.exists() && !self.opts.replace_old_file {
                return Ok(Target::Exists(mirrored));
            }
            return Ok(Target::Write(mirrored));
        }

        let file_name = mirrored
            .file_name()
            .map(PathBuf::from)
            .ok_or_else(|| StampError::invalid_input(format!("'{}' has no file name", path.display())))?;
        let mut candidate = mirrored.clone();
        for _ in 0..self.opts.max_name_attempts.max(1) {
            candidate.set_file_name(randomized_file_name(&file_name, &self.suffixes.next_suffix()));
            if !candidate.exists() {
                return Ok(Target::Write(candidate));
            }
        }
        Ok(Target::Exists(candidate))
    }

    /// `output_root/<path relative to input_root>`.
    pub fn mirrored_path(&self, path: &Path, input_root: &Path, output_root: &Path) -> StampResult<PathBuf> {
        let rel = path.strip_prefix(input_root).map_err(|_| {
            StampError::invalid_input(format!(
                "'{}' is not below '{}'",
                path.display(),
                input_root.display()
            ))
        })?;
        Ok(output_root.join(rel))
    }
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
#[path = "../../tests/unit/batch/driver.rs"]
mod tests;
