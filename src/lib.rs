//! icongen - SignalCalc app-icon set generator
//!
//! A library for procedurally rendering the SignalCalc logo at every edge
//! length App Store submission requires and exporting the set as PNG files.

pub mod cli;
pub mod error;
pub mod output;
pub mod render;
pub mod report;
pub mod types;

pub use error::{IconError, Result};
pub use render::{encode_png, render_icon, IconLayout};
pub use report::{export_batch, export_one, ExportOutcome, ExportReport};
pub use types::{Colour, IconPalette, IconRole, SizeSpec, ICON_SIZES};
