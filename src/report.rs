//! Batch export: render, encode, write, and collect per-item outcomes.
//!
//! A failure on one icon never aborts the rest of the batch. Only
//! directory creation is fatal, since no icon can be written without it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::render::{encode_png, render_icon};
use crate::types::{IconPalette, SizeSpec};

/// The result of exporting one size variant.
#[derive(Debug)]
pub enum ExportOutcome {
    Written {
        name: &'static str,
        edge: u32,
        path: PathBuf,
    },
    Failed {
        name: &'static str,
        edge: u32,
        error: IconError,
    },
}

impl ExportOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ExportOutcome::Written { .. })
    }
}

/// Outcomes for a whole batch, in size-table order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub outcomes: Vec<ExportOutcome>,
}

impl ExportReport {
    pub fn written_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.written_count()
    }
}

/// Render one spec and write it under `dir`. Existing files are overwritten.
pub fn export_one(spec: &SizeSpec, palette: &IconPalette, dir: &Path) -> ExportOutcome {
    let failed = |error| ExportOutcome::Failed {
        name: spec.name,
        edge: spec.edge,
        error,
    };

    let image = render_icon(spec.edge, palette);
    let bytes = match encode_png(&image) {
        Ok(bytes) => bytes,
        Err(error) => return failed(error),
    };

    let path = dir.join(spec.filename());
    match fs::write(&path, &bytes) {
        Ok(()) => ExportOutcome::Written {
            name: spec.name,
            edge: spec.edge,
            path,
        },
        Err(e) => failed(IconError::Io {
            path,
            message: format!("failed to write PNG: {}", e),
        }),
    }
}

/// Export every spec into `dir`, creating it first.
///
/// Directory creation is the only fatal error; per-item failures are
/// recorded in the report and the batch continues.
pub fn export_batch(
    specs: &[SizeSpec],
    palette: &IconPalette,
    dir: &Path,
) -> Result<ExportReport> {
    fs::create_dir_all(dir).map_err(|e| IconError::Io {
        path: dir.to_path_buf(),
        message: format!("failed to create output directory: {}", e),
    })?;

    let outcomes = specs
        .iter()
        .map(|spec| export_one(spec, palette, dir))
        .collect();

    Ok(ExportReport { outcomes })
}
