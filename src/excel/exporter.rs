//! Combination sheet exporter

use crate::core;
use crate::error::{ComboError, ComboResult};
use crate::types::{Combination, MatrixConfig, SheetColumn};
use rust_xlsxwriter::{
    Color, ConditionalFormatBlank, Format, FormatBorder, Workbook, Worksheet,
};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Writes the combination matrix to a single-sheet .xlsx workbook
pub struct SheetExporter {
    config: MatrixConfig,
    rows: Vec<Combination>,
    /// resolution name -> row fill format
    row_formats: HashMap<String, Format>,
}

impl SheetExporter {
    /// Create a new exporter, enumerating the combinations up front
    pub fn new(config: MatrixConfig) -> Self {
        let rows = core::enumerate(&config);

        let row_formats = config
            .resolutions
            .iter()
            .filter_map(|res| {
                res.rgb().map(|rgb| {
                    let format = Format::new().set_background_color(Color::RGB(rgb));
                    (res.name.clone(), format)
                })
            })
            .collect();

        Self {
            config,
            rows,
            row_formats,
        }
    }

    /// Combination rows that `export` writes, in sheet order
    pub fn rows(&self) -> &[Combination] {
        &self.rows
    }

    /// Write the workbook to `output_path`
    pub fn export(&self, output_path: &Path) -> ComboResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&self.config.sheet_name)
            .map_err(|e| ComboError::Export(format!("Failed to set worksheet name: {}", e)))?;

        self.write_header(worksheet)?;

        for combo in &self.rows {
            self.write_row(worksheet, combo)?;
        }

        self.add_border_rule(worksheet)?;
        Self::set_layout(worksheet)?;

        workbook
            .save(output_path)
            .map_err(|e| ComboError::Export(format!("Failed to save Excel file: {}", e)))?;

        info!(
            path = %output_path.display(),
            rows = self.rows.len(),
            "wrote combination workbook"
        );
        Ok(())
    }

    /// Header row (row 0)
    fn write_header(&self, worksheet: &mut Worksheet) -> ComboResult<()> {
        let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);

        for column in SheetColumn::ALL {
            worksheet
                .write_string_with_format(0, column.col(), column.header(), &header_format)
                .map_err(|e| ComboError::Export(format!("Failed to write header: {}", e)))?;
        }
        Ok(())
    }

    /// One combination row; the sheet row equals the combination index
    fn write_row(&self, worksheet: &mut Worksheet, combo: &Combination) -> ComboResult<()> {
        let row = combo.index;
        let default_format = Format::new();
        let format = match self.row_formats.get(&combo.resolution) {
            Some(format) => {
                worksheet.set_row_format(row, format).map_err(|e| {
                    ComboError::Export(format!("Failed to set row format: {}", e))
                })?;
                format
            }
            None => {
                debug!(resolution = %combo.resolution, "no fill color for resolution");
                &default_format
            }
        };

        worksheet
            .write_number_with_format(row, SheetColumn::Index.col(), combo.index, format)
            .map_err(|e| ComboError::Export(format!("Failed to write index: {}", e)))?;

        let text_cells = [
            (SheetColumn::Resolution, combo.resolution.clone()),
            (SheetColumn::FrameRate, combo.frame_rate.clone()),
            (SheetColumn::Lanes, combo.lane_label()),
            (SheetColumn::ColorDepth, combo.color_depth.clone()),
        ];
        for (column, text) in &text_cells {
            worksheet
                .write_string_with_format(row, column.col(), text, format)
                .map_err(|e| ComboError::Export(format!("Failed to write text: {}", e)))?;
        }

        worksheet
            .insert_checkbox_with_format(row, SheetColumn::checkbox().col(), false, format)
            .map_err(|e| ComboError::Export(format!("Failed to insert checkbox: {}", e)))?;

        Ok(())
    }

    /// Thin border on every non-blank cell of the table
    fn add_border_rule(&self, worksheet: &mut Worksheet) -> ComboResult<()> {
        let border_format = Format::new().set_border(FormatBorder::Thin);
        let rule = ConditionalFormatBlank::new()
            .invert()
            .set_format(&border_format);

        worksheet
            .add_conditional_format(
                0,
                0,
                self.rows.len() as u32,
                SheetColumn::last().col(),
                &rule,
            )
            .map_err(|e| {
                ComboError::Export(format!("Failed to add conditional format: {}", e))
            })?;
        Ok(())
    }

    fn set_layout(worksheet: &mut Worksheet) -> ComboResult<()> {
        for column in SheetColumn::ALL {
            worksheet
                .set_column_width(column.col(), column.width())
                .map_err(|e| ComboError::Export(format!("Failed to set column width: {}", e)))?;
        }

        worksheet
            .set_freeze_panes(1, 0)
            .map_err(|e| ComboError::Export(format!("Failed to freeze header: {}", e)))?;
        Ok(())
    }
}
