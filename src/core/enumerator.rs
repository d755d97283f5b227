//! Cartesian product of the four matrix dimensions

use crate::types::{Combination, MatrixConfig};
use tracing::debug;

/// Number of rows `enumerate` produces for `config`
pub fn combination_count(config: &MatrixConfig) -> usize {
    config.resolutions.len()
        * config.frame_rates.len()
        * config.lane_counts.len()
        * config.color_depths.len()
}

/// Enumerate every combination row.
///
/// Order is resolution, then frame rate, then lane count, then color depth,
/// with color depth varying fastest. Indices start at 1.
///
/// # Example
/// ```
/// use combogen::core::enumerate;
/// use combogen::types::MatrixConfig;
///
/// let rows = enumerate(&MatrixConfig::default());
/// assert_eq!(rows.len(), 198);
/// assert_eq!(rows[0].resolution, "1920x1080");
/// assert_eq!(rows[1].color_depth, "10 bit");
/// ```
pub fn enumerate(config: &MatrixConfig) -> Vec<Combination> {
    let mut rows = Vec::with_capacity(combination_count(config));
    let mut index = 1u32;

    for res in &config.resolutions {
        for fr in &config.frame_rates {
            for &lanes in &config.lane_counts {
                for depth in &config.color_depths {
                    rows.push(Combination {
                        index,
                        resolution: res.name.clone(),
                        frame_rate: fr.clone(),
                        lanes,
                        color_depth: depth.clone(),
                    });
                    index += 1;
                }
            }
        }
    }

    debug!(rows = rows.len(), "enumerated combinations");
    rows
}
