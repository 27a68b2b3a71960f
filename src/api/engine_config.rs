use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMode, MAX_RANK, Viewport};
use crate::error::{SurferError, SurferResult};
use crate::render::Color;

use super::validation::validate_config;

/// Number of colors cycled through by plotted series.
pub const SERIES_PALETTE_LEN: usize = 4;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Missing fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NameSurferConfig {
    #[serde(default)]
    pub viewport: Viewport,
    /// Distance of both horizontal boundary lines from the canvas edges.
    #[serde(default = "default_graph_margin_px")]
    pub graph_margin_px: f64,
    #[serde(default = "default_max_rank")]
    pub max_rank: u32,
    #[serde(default = "default_series_palette")]
    pub series_palette: [Color; SERIES_PALETTE_LEN],
    #[serde(default = "default_grid_color")]
    pub grid_line_color: Color,
    #[serde(default = "default_grid_color")]
    pub decade_label_color: Color,
    #[serde(default = "default_decade_label_font_px")]
    pub decade_label_font_px: f64,
    #[serde(default = "default_name_label_font_px")]
    pub name_label_font_px: f64,
    #[serde(default = "default_stroke_width")]
    pub series_stroke_width: f64,
    #[serde(default = "default_stroke_width")]
    pub grid_stroke_width: f64,
    #[serde(default)]
    pub coordinate_mode: CoordinateMode,
}

impl NameSurferConfig {
    /// Creates a default config for the given surface size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            graph_margin_px: default_graph_margin_px(),
            max_rank: default_max_rank(),
            series_palette: default_series_palette(),
            grid_line_color: default_grid_color(),
            decade_label_color: default_grid_color(),
            decade_label_font_px: default_decade_label_font_px(),
            name_label_font_px: default_name_label_font_px(),
            series_stroke_width: default_stroke_width(),
            grid_stroke_width: default_stroke_width(),
            coordinate_mode: CoordinateMode::default(),
        }
    }

    #[must_use]
    pub fn with_graph_margin_px(mut self, margin_px: f64) -> Self {
        self.graph_margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_max_rank(mut self, max_rank: u32) -> Self {
        self.max_rank = max_rank;
        self
    }

    #[must_use]
    pub fn with_series_palette(mut self, palette: [Color; SERIES_PALETTE_LEN]) -> Self {
        self.series_palette = palette;
        self
    }

    #[must_use]
    pub fn with_label_font_sizes(mut self, decade_label_px: f64, name_label_px: f64) -> Self {
        self.decade_label_font_px = decade_label_px;
        self.name_label_font_px = name_label_px;
        self
    }

    #[must_use]
    pub fn with_coordinate_mode(mut self, mode: CoordinateMode) -> Self {
        self.coordinate_mode = mode;
        self
    }

    /// Color of the series at position `index` in the chart model.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        self.series_palette[index % SERIES_PALETTE_LEN]
    }

    pub fn validate(self) -> SurferResult<Self> {
        validate_config(self)
    }

    pub fn from_json_str(input: &str) -> SurferResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| SurferError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> SurferResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SurferError::InvalidData(format!("failed to serialize config json: {e}")))
    }
}

impl Default for NameSurferConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

fn default_graph_margin_px() -> f64 {
    20.0
}

fn default_max_rank() -> u32 {
    MAX_RANK
}

fn default_series_palette() -> [Color; SERIES_PALETTE_LEN] {
    [Color::BLACK, Color::RED, Color::BLUE, Color::MAGENTA]
}

fn default_grid_color() -> Color {
    Color::BLACK
}

fn default_decade_label_font_px() -> f64 {
    14.0
}

fn default_name_label_font_px() -> f64 {
    10.0
}

fn default_stroke_width() -> f64 {
    1.0
}
