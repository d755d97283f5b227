use crate::error::{ComboError, ComboResult};
use crate::types::MatrixConfig;
use regex::Regex;
use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;
use tracing::debug;

/// Characters Excel rejects in worksheet names
const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Maximum worksheet name length accepted by Excel
const MAX_SHEET_NAME_LEN: usize = 31;

/// Parse a matrix configuration file.
///
/// Every key is optional; anything left out keeps its built-in default, so a
/// file containing only `lane_counts: [1, 2]` still produces the full default
/// resolution list.
///
/// # Example
/// ```no_run
/// use combogen::parser::parse_config;
/// use std::path::Path;
///
/// let config = parse_config(Path::new("matrix.yaml"))?;
/// println!("Resolutions: {}", config.resolutions.len());
/// # Ok::<(), combogen::error::ComboError>(())
/// ```
pub fn parse_config(path: &Path) -> ComboResult<MatrixConfig> {
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), "parsing matrix config");
    parse_config_str(&content)
}

/// Parse a matrix configuration from YAML text
pub fn parse_config_str(content: &str) -> ComboResult<MatrixConfig> {
    if content.trim().is_empty() {
        return Ok(MatrixConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Check a configuration before it is enumerated and written.
pub fn validate_config(config: &MatrixConfig) -> ComboResult<()> {
    require_non_empty("resolutions", config.resolutions.len())?;
    require_non_empty("frame_rates", config.frame_rates.len())?;
    require_non_empty("lane_counts", config.lane_counts.len())?;
    require_non_empty("color_depths", config.color_depths.len())?;

    let resolution_pattern = Regex::new(r"^[0-9]+x[0-9]+$")
        .map_err(|e| ComboError::Validation(format!("Regex error: {}", e)))?;
    let color_pattern = Regex::new(r"^#[0-9A-Fa-f]{6}$")
        .map_err(|e| ComboError::Validation(format!("Regex error: {}", e)))?;

    for res in &config.resolutions {
        if !resolution_pattern.is_match(&res.name) {
            return Err(ComboError::Validation(format!(
                "Resolution '{}' must look like <width>x<height>",
                res.name
            )));
        }
        if !color_pattern.is_match(&res.color) {
            return Err(ComboError::Validation(format!(
                "Color '{}' for resolution '{}' must look like #RRGGBB",
                res.color, res.name
            )));
        }
    }

    if config.lane_counts.contains(&0) {
        return Err(ComboError::Validation(
            "lane_counts must be greater than zero".to_string(),
        ));
    }

    require_unique("resolutions", config.resolutions.iter().map(|r| &r.name))?;
    require_unique("frame_rates", config.frame_rates.iter())?;
    require_unique("lane_counts", config.lane_counts.iter())?;
    require_unique("color_depths", config.color_depths.iter())?;

    validate_sheet_name(&config.sheet_name)
}

/// Excel worksheet naming rules
pub fn validate_sheet_name(name: &str) -> ComboResult<()> {
    if name.is_empty() {
        return Err(ComboError::Validation(
            "Sheet name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(ComboError::Validation(format!(
            "Sheet name '{}' is longer than {} characters",
            name, MAX_SHEET_NAME_LEN
        )));
    }
    if let Some(c) = name.chars().find(|c| INVALID_SHEET_CHARS.contains(c)) {
        return Err(ComboError::Validation(format!(
            "Sheet name '{}' contains invalid character '{}'",
            name, c
        )));
    }
    Ok(())
}

fn require_non_empty(dimension: &str, len: usize) -> ComboResult<()> {
    if len == 0 {
        return Err(ComboError::Validation(format!(
            "Dimension '{}' must have at least one value",
            dimension
        )));
    }
    Ok(())
}

fn require_unique<T, I>(dimension: &str, values: I) -> ComboResult<()>
where
    T: Eq + Hash + std::fmt::Display,
    I: Iterator<Item = T>,
{
    let mut seen = HashSet::new();
    for value in values {
        let label = value.to_string();
        if !seen.insert(value) {
            return Err(ComboError::Validation(format!(
                "Duplicate value '{}' in '{}'",
                label, dimension
            )));
        }
    }
    Ok(())
}
