use crate::core::RankScale;
use crate::error::{SurferError, SurferResult};

use super::NameSurferConfig;

pub(super) fn validate_config(config: NameSurferConfig) -> SurferResult<NameSurferConfig> {
    config.viewport.validate()?;
    // Margin and max-rank rules live with the scale itself.
    RankScale::new(config.max_rank, config.graph_margin_px)?;

    for (name, value) in [
        ("decade_label_font_px", config.decade_label_font_px),
        ("name_label_font_px", config.name_label_font_px),
        ("series_stroke_width", config.series_stroke_width),
        ("grid_stroke_width", config.grid_stroke_width),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(SurferError::InvalidData(format!(
                "`{name}` must be finite and > 0"
            )));
        }
    }

    config.grid_line_color.validate()?;
    config.decade_label_color.validate()?;
    for color in config.series_palette {
        color.validate()?;
    }

    Ok(config)
}
