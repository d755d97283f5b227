use crate::core;
use crate::error::ComboResult;
use crate::excel::{read_progress, SheetExporter};
use crate::parser;
use crate::types::{Combination, MatrixConfig, ResolutionSpec};
use colored::{ColoredString, Colorize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Pending indices shown before the list is elided
const MAX_PENDING_SHOWN: usize = 20;

/// Load the config file if one was given, otherwise the built-in matrix
pub fn load_config(config: Option<&PathBuf>) -> ComboResult<MatrixConfig> {
    match config {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            parser::parse_config(path)
        }
        None => Ok(MatrixConfig::default()),
    }
}

/// Execute the generate command
pub fn generate(
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    sheet_name: Option<String>,
    verbose: bool,
) -> ComboResult<()> {
    let mut matrix = load_config(config.as_ref())?;
    if let Some(path) = output {
        matrix.output = path;
    }
    if let Some(name) = sheet_name {
        matrix.sheet_name = name;
    }
    parser::validate_config(&matrix)?;

    if verbose {
        println!("{}", "🧮 Enumerating combinations...".cyan());
        println!(
            "   {} resolutions × {} frame rates × {} lane counts × {} color depths",
            matrix.resolutions.len(),
            matrix.frame_rates.len(),
            matrix.lane_counts.len(),
            matrix.color_depths.len()
        );
        println!("   {} rows\n", core::combination_count(&matrix));
    }

    let output_path = matrix.output.clone();
    let exporter = SheetExporter::new(matrix);
    exporter.export(&output_path)?;

    println!(
        "Successfully created '{}' with interactive checkboxes.",
        output_path.display()
    );
    Ok(())
}

/// Execute the list command
pub fn list(config: Option<PathBuf>, json: bool) -> ComboResult<()> {
    let matrix = load_config(config.as_ref())?;
    parser::validate_config(&matrix)?;
    let rows = core::enumerate(&matrix);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("📋 {} combinations", rows.len()).bold().green()
    );
    for combo in &rows {
        println!("{}", format_row(combo, matrix.color_for(&combo.resolution)));
    }
    Ok(())
}

/// Execute the init-config command
pub fn init_config(output: Option<PathBuf>) -> ComboResult<()> {
    let yaml = serde_yaml::to_string(&MatrixConfig::default())?;

    match output {
        Some(path) => {
            fs::write(&path, yaml)?;
            println!("{}", "✅ Default configuration written".bold().green());
            println!("   File: {}", path.display());
        }
        None => print!("{}", yaml),
    }
    Ok(())
}

/// Execute the progress command
///
/// The sheet name falls back to the one in the config (or the built-in
/// default) when not given explicitly.
pub fn progress(
    file: PathBuf,
    config: Option<PathBuf>,
    sheet_name: Option<String>,
) -> ComboResult<()> {
    let sheet_name = match sheet_name {
        Some(name) => name,
        None => load_config(config.as_ref())?.sheet_name,
    };

    let progress = read_progress(&file, &sheet_name)?;

    println!("{}", "📊 Combination progress".bold().green());
    println!("   File: {}", file.display());
    println!("   Sheet: {}\n", sheet_name);

    println!(
        "   Completed: {}/{} ({})",
        progress.completed.to_string().bold(),
        progress.total,
        format_percent(progress.percent())
    );

    if progress.is_complete() {
        println!("{}", "   ✅ All combinations done".green());
    } else if !progress.pending.is_empty() {
        println!(
            "   Pending:   {}",
            format_pending(&progress.pending, MAX_PENDING_SHOWN).yellow()
        );
    }
    Ok(())
}

/// One terminal line per combination, resolution shaded with its row color
fn format_row(combo: &Combination, spec: Option<&ResolutionSpec>) -> String {
    let resolution = format!("{:<10}", combo.resolution);
    let resolution: ColoredString = match spec.and_then(|s| s.rgb()) {
        Some(rgb) => resolution.black().on_truecolor(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        ),
        None => resolution.normal(),
    };

    format!(
        "{:>4}  {}  {:<6} {:<7} {}",
        combo.index,
        resolution,
        combo.frame_rate,
        combo.lane_label(),
        combo.color_depth
    )
}

/// Format a percentage with one decimal place, dropping a trailing `.0`
fn format_percent(p: f64) -> String {
    let s = format!("{:.1}", p);
    let s = s.strip_suffix(".0").unwrap_or(&s);
    format!("{}%", s)
}

/// Comma-separated indices, elided after `max` entries
fn format_pending(pending: &[u32], max: usize) -> String {
    let shown: Vec<String> = pending.iter().take(max).map(|i| i.to_string()).collect();
    let mut out = shown.join(", ");
    if pending.len() > max {
        out.push_str(&format!(", … (+{} more)", pending.len() - max));
    }
    out
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
