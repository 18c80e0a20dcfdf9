//! List command implementation.
//!
//! Prints the fixed size table grouped by role, or the upload-purpose guide.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{IconRole, ICON_SIZES};

/// Print the size table or the upload-purpose guide
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show the pattern -> upload-purpose guide instead of the size table
    #[arg(long)]
    pub purposes: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    if args.purposes {
        super::generate::print_upload_guide(printer);
        return Ok(());
    }

    for role in IconRole::ALL {
        let names: Vec<String> = ICON_SIZES
            .iter()
            .filter(|spec| spec.role == role)
            .map(|spec| format!("{} ({}px)", spec.name, spec.edge))
            .collect();
        printer.info(role.label(), &names.join(", "));
    }

    Ok(())
}
