use serde::{Deserialize, Serialize};
use std::path::PathBuf;

//==============================================================================
// Defaults
//==============================================================================

/// Default output file name, written to the current directory
pub const DEFAULT_OUTPUT: &str = "video_combinations_interactive.xlsx";

/// Default worksheet name
pub const DEFAULT_SHEET_NAME: &str = "Combinations";

const DEFAULT_RESOLUTIONS: [(&str, &str); 11] = [
    ("1920x1080", "#DDEBF7"),
    ("2400x1200", "#E2F0D9"),
    ("2560x1440", "#FFF2CC"),
    ("2880x1620", "#F8CBAD"),
    ("3036x1708", "#D9E1F2"),
    ("3840x2160", "#FCE4D6"),
    ("5120x1600", "#EDEDED"),
    ("6240x1172", "#DEEBF7"),
    ("2560x1600", "#D0E0E3"),
    ("2880x1800", "#EAD8D7"),
    ("2240x1260", "#D4EFDF"),
];

const DEFAULT_FRAME_RATES: [&str; 3] = ["60Hz", "120Hz", "144Hz"];

const DEFAULT_LANE_COUNTS: [u32; 3] = [2, 4, 8];

const DEFAULT_COLOR_DEPTHS: [&str; 2] = ["8 bit", "10 bit"];

//==============================================================================
// Matrix Configuration
//==============================================================================

/// A resolution label and the fill color used for all of its rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSpec {
    /// Resolution in `<width>x<height>` form, e.g. `1920x1080`
    pub name: String,
    /// Row fill color as `#RRGGBB`
    pub color: String,
}

impl ResolutionSpec {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Fill color as a 24-bit RGB value, if `color` is well formed
    pub fn rgb(&self) -> Option<u32> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok()
    }
}

/// The four dimensions of the matrix plus output presentation.
///
/// Every field may be omitted from a YAML config file; missing fields keep
/// the built-in values from [`MatrixConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub resolutions: Vec<ResolutionSpec>,
    pub frame_rates: Vec<String>,
    pub lane_counts: Vec<u32>,
    pub color_depths: Vec<String>,
    pub sheet_name: String,
    pub output: PathBuf,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            resolutions: DEFAULT_RESOLUTIONS
                .iter()
                .map(|(name, color)| ResolutionSpec::new(*name, *color))
                .collect(),
            frame_rates: DEFAULT_FRAME_RATES.iter().map(|s| s.to_string()).collect(),
            lane_counts: DEFAULT_LANE_COUNTS.to_vec(),
            color_depths: DEFAULT_COLOR_DEPTHS.iter().map(|s| s.to_string()).collect(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl MatrixConfig {
    /// Look up the configured fill color for a resolution
    pub fn color_for(&self, resolution: &str) -> Option<&ResolutionSpec> {
        self.resolutions.iter().find(|r| r.name == resolution)
    }
}

//==============================================================================
// Combination Rows
//==============================================================================

/// One tuple from the Cartesian product of the four dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    /// 1-based row number, also the Excel row of this combination
    pub index: u32,
    pub resolution: String,
    pub frame_rate: String,
    pub lanes: u32,
    pub color_depth: String,
}

impl Combination {
    /// Lane count as displayed in the sheet, e.g. `4 LANE`
    pub fn lane_label(&self) -> String {
        format!("{} LANE", self.lanes)
    }
}

//==============================================================================
// Sheet Layout
//==============================================================================

/// Fixed column layout of the generated sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetColumn {
    Index,
    Resolution,
    FrameRate,
    Lanes,
    ColorDepth,
    Done,
}

impl SheetColumn {
    pub const ALL: [SheetColumn; 6] = [
        SheetColumn::Index,
        SheetColumn::Resolution,
        SheetColumn::FrameRate,
        SheetColumn::Lanes,
        SheetColumn::ColorDepth,
        SheetColumn::Done,
    ];

    /// Zero-based worksheet column
    pub fn col(self) -> u16 {
        self as u16
    }

    pub fn header(self) -> &'static str {
        match self {
            SheetColumn::Index => "索引",
            SheetColumn::Resolution => "分辨率",
            SheetColumn::FrameRate => "帧率",
            SheetColumn::Lanes => "LANE数",
            SheetColumn::ColorDepth => "色深",
            SheetColumn::Done => "完成",
        }
    }

    /// Column width in Excel character units
    pub fn width(self) -> f64 {
        match self {
            SheetColumn::Index => 5.0,
            SheetColumn::Resolution => 18.0,
            SheetColumn::FrameRate => 8.0,
            SheetColumn::Lanes => 10.0,
            SheetColumn::ColorDepth => 8.0,
            SheetColumn::Done => 8.0,
        }
    }

    /// The checkbox column
    pub fn checkbox() -> SheetColumn {
        SheetColumn::Done
    }

    pub fn last() -> SheetColumn {
        SheetColumn::Done
    }
}
