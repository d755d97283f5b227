//! Read back a generated workbook and tally ticked checkboxes

use crate::error::{ComboError, ComboResult};
use crate::types::SheetColumn;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;
use tracing::debug;

/// Completion state of a combination sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progress {
    /// Combination rows found (rows with a numeric index)
    pub total: usize,
    /// Rows whose checkbox is ticked
    pub completed: usize,
    /// Indices of rows still unticked
    pub pending: Vec<u32>,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Count ticked rows in `sheet_name` of the workbook at `path`
pub fn read_progress(path: &Path, sheet_name: &str) -> ComboResult<Progress> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| ComboError::Import(format!("Failed to open Excel file: {}", e)))?;

    if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
        return Err(ComboError::Import(format!(
            "Sheet '{}' not found in {}",
            sheet_name,
            path.display()
        )));
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| ComboError::Import(format!("Failed to read sheet: {}", e)))?;

    let progress = tally(&range);
    debug!(
        total = progress.total,
        completed = progress.completed,
        "read progress"
    );
    Ok(progress)
}

/// Row 0 is the header; data rows carry their index in the first column
fn tally(range: &Range<Data>) -> Progress {
    let mut progress = Progress::default();
    let (height, _) = range.get_size();
    let index_col = SheetColumn::Index.col() as usize;
    let checkbox_col = SheetColumn::checkbox().col() as usize;

    for row in 1..height {
        let index = match range.get((row, index_col)) {
            Some(Data::Float(f)) => *f as u32,
            Some(Data::Int(i)) => *i as u32,
            _ => continue,
        };
        progress.total += 1;

        match range.get((row, checkbox_col)) {
            Some(Data::Bool(true)) => progress.completed += 1,
            _ => progress.pending.push(index),
        }
    }

    progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_empty() {
        let progress = Progress::default();
        assert_eq!(progress.percent(), 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_percent_partial() {
        let progress = Progress {
            total: 4,
            completed: 1,
            pending: vec![2, 3, 4],
        };
        assert_eq!(progress.percent(), 25.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_tally_reads_checkbox_column() {
        let mut range: Range<Data> = Range::new((0, 0), (3, 5));
        range.set_value((0, 0), Data::String("索引".to_string()));
        range.set_value((1, 0), Data::Float(1.0));
        range.set_value((1, 5), Data::Bool(true));
        range.set_value((2, 0), Data::Float(2.0));
        range.set_value((2, 5), Data::Bool(false));
        range.set_value((3, 0), Data::Float(3.0));

        let progress = tally(&range);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.pending, vec![2, 3]);
    }
}
