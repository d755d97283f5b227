//! combogen - display-parameter combination matrix generator
//!
//! Enumerates every (resolution, frame rate, lane count, color depth) tuple
//! and writes it to an .xlsx sheet with one fill color per resolution and an
//! unchecked checkbox on each row for manual progress tracking.
//!
//! # Example
//!
//! ```no_run
//! use combogen::excel::SheetExporter;
//! use combogen::types::MatrixConfig;
//! use std::path::Path;
//!
//! let exporter = SheetExporter::new(MatrixConfig::default());
//! println!("Rows: {}", exporter.rows().len());
//! exporter.export(Path::new("video_combinations_interactive.xlsx"))?;
//! # Ok::<(), combogen::error::ComboError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use error::{ComboError, ComboResult};
pub use types::{Combination, MatrixConfig, ResolutionSpec, SheetColumn};
