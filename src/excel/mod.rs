//! Excel output and read-back for the combination sheet
//!
//! - Export: combination matrix → .xlsx with row colors and checkboxes
//! - Progress: .xlsx → count of ticked checkboxes

mod exporter;
mod progress;

pub use exporter::SheetExporter;
pub use progress::{read_progress, Progress};
