//! Generate command implementation.
//!
//! Runs the batch exporter over the fixed size table, prints one status line
//! per icon, and closes with a summary and the App Store upload guide.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::report::{export_batch, ExportOutcome};
use crate::types::{IconPalette, IconRole, ICON_SIZES};

/// Render the full icon set to an output directory
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory
    #[arg(long, short, default_value = "AppIcons")]
    pub output: PathBuf,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from("AppIcons"),
        }
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let palette = IconPalette::signal_calc();

    // Directory creation is the only fatal error; per-icon failures are
    // reported below and the process still exits zero.
    let report = export_batch(&ICON_SIZES, &palette, &args.output)?;

    for outcome in &report.outcomes {
        match outcome {
            ExportOutcome::Written { name, edge, .. } => {
                printer.status("Rendering", &format!("{} ({}x{})", name, edge, edge));
            }
            ExportOutcome::Failed { name, edge, error } => {
                printer.error("Failed", &format!("{} ({}x{}): {}", name, edge, edge, error));
            }
        }
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(report.written_count(), "icon", "icons"),
            printer.cyan(&display_path(&args.output))
        ),
    );
    if report.failed_count() > 0 {
        printer.warning(
            "Skipped",
            &format!("{} (see errors above)", plural(report.failed_count(), "icon", "icons")),
        );
    }

    print_upload_guide(printer);
    Ok(())
}

/// Map filename patterns to their App Store upload purpose. Informational
/// only; nothing parses this.
pub fn print_upload_guide(printer: &Printer) {
    printer.info("Guide", "where each file goes when submitting");
    for role in IconRole::ALL {
        printer.info(
            role.label(),
            &format!("{} {}", role.pattern(), printer.dim(role.purpose())),
        );
    }
}
