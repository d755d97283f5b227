//! Workbook output tests
//!
//! Generates real .xlsx files and reads them back with calamine.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use combogen::excel::{read_progress, SheetExporter};
use combogen::types::{MatrixConfig, ResolutionSpec};
use combogen::ComboError;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

fn export_default(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("combos.xlsx");
    SheetExporter::new(MatrixConfig::default())
        .export(&path)
        .expect("export should succeed");
    path
}

fn open_sheet(path: &Path, sheet: &str) -> Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook should open");
    workbook
        .worksheet_range(sheet)
        .expect("sheet should be readable")
}

fn text(range: &Range<Data>, row: usize, col: usize) -> String {
    match range.get((row, col)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected string at ({}, {}), got {:?}", row, col, other),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LAYOUT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_export_creates_single_combinations_sheet() {
    let dir = TempDir::new().unwrap();
    let path = export_default(&dir);
    assert!(path.exists());

    let workbook: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Combinations".to_string()]);
}

#[test]
fn test_export_header_row() {
    let dir = TempDir::new().unwrap();
    let range = open_sheet(&export_default(&dir), "Combinations");

    let headers: Vec<String> = (0..6).map(|col| text(&range, 0, col)).collect();
    assert_eq!(headers, vec!["索引", "分辨率", "帧率", "LANE数", "色深", "完成"]);
}

#[test]
fn test_export_size_is_header_plus_198_rows() {
    let dir = TempDir::new().unwrap();
    let range = open_sheet(&export_default(&dir), "Combinations");
    assert_eq!(range.get_size(), (199, 6));
}

#[test]
fn test_export_first_row_values() {
    let dir = TempDir::new().unwrap();
    let range = open_sheet(&export_default(&dir), "Combinations");

    assert_eq!(range.get((1, 0)), Some(&Data::Float(1.0)));
    assert_eq!(text(&range, 1, 1), "1920x1080");
    assert_eq!(text(&range, 1, 2), "60Hz");
    assert_eq!(text(&range, 1, 3), "2 LANE");
    assert_eq!(text(&range, 1, 4), "8 bit");
    assert_eq!(range.get((1, 5)), Some(&Data::Bool(false)));
}

#[test]
fn test_export_last_row_values() {
    let dir = TempDir::new().unwrap();
    let range = open_sheet(&export_default(&dir), "Combinations");

    assert_eq!(range.get((198, 0)), Some(&Data::Float(198.0)));
    assert_eq!(text(&range, 198, 1), "2240x1260");
    assert_eq!(text(&range, 198, 2), "144Hz");
    assert_eq!(text(&range, 198, 3), "8 LANE");
    assert_eq!(text(&range, 198, 4), "10 bit");
}

#[test]
fn test_every_row_has_unchecked_checkbox() {
    let dir = TempDir::new().unwrap();
    let range = open_sheet(&export_default(&dir), "Combinations");

    for row in 1..199 {
        assert_eq!(
            range.get((row, 5)),
            Some(&Data::Bool(false)),
            "row {} should carry an unchecked checkbox",
            row
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CUSTOM CONFIG TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_export_custom_sheet_name_and_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("small.xlsx");
    let config = MatrixConfig {
        resolutions: vec![ResolutionSpec::new("1280x720", "#FFFFFF")],
        frame_rates: vec!["30Hz".to_string()],
        lane_counts: vec![1, 2],
        color_depths: vec!["12 bit".to_string()],
        sheet_name: "Panel".to_string(),
        ..MatrixConfig::default()
    };

    SheetExporter::new(config).export(&path).unwrap();

    let range = open_sheet(&path, "Panel");
    assert_eq!(range.get_size(), (3, 6));
    assert_eq!(text(&range, 2, 3), "2 LANE");
    assert_eq!(text(&range, 2, 4), "12 bit");
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.xlsx");
    let result = SheetExporter::new(MatrixConfig::default()).export(&path);
    assert!(matches!(result, Err(ComboError::Export(_))));
}

// ═══════════════════════════════════════════════════════════════════════════
// PROGRESS TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_progress_of_fresh_workbook() {
    let dir = TempDir::new().unwrap();
    let path = export_default(&dir);

    let progress = read_progress(&path, "Combinations").unwrap();
    assert_eq!(progress.total, 198);
    assert_eq!(progress.completed, 0);
    assert_eq!(progress.pending.first(), Some(&1));
    assert_eq!(progress.pending.last(), Some(&198));
    assert_eq!(progress.percent(), 0.0);
}

#[test]
fn test_progress_unknown_sheet() {
    let dir = TempDir::new().unwrap();
    let path = export_default(&dir);

    let err = read_progress(&path, "Nope").unwrap_err();
    assert!(matches!(err, ComboError::Import(_)));
    assert!(err.to_string().contains("Nope"));
}

#[test]
fn test_progress_missing_file() {
    let result = read_progress(Path::new("/nonexistent/combos.xlsx"), "Combinations");
    assert!(matches!(result, Err(ComboError::Import(_))));
}
