use tracing::trace;

use crate::core::{NDECADES, RankScale, Viewport, decade_year};
use crate::error::SurferResult;
use crate::render::{LinePrimitive, RenderFrame, TextPrimitive, TextVAlign};

use super::line_series_render_frame_builder::append_series_primitives;
use super::{ChartModel, NameSurferConfig};

/// Builds the complete frame for `model` on a `viewport`-sized surface.
///
/// The grid comes first, then one series per entry in model order, so later
/// series paint over earlier ones.
pub fn build_render_frame(
    model: &ChartModel,
    viewport: Viewport,
    config: &NameSurferConfig,
) -> SurferResult<RenderFrame> {
    let viewport = viewport.validate()?;
    let scale = RankScale::new(config.max_rank, config.graph_margin_px)?
        .with_mode(config.coordinate_mode);

    let mut frame = RenderFrame::new(viewport);
    append_grid_primitives(&mut frame, scale, config)?;
    for (index, entry) in model.entries().enumerate() {
        append_series_primitives(&mut frame, entry, config.series_color(index), scale, config)?;
    }

    trace!(
        width = viewport.width,
        height = viewport.height,
        series = model.len(),
        primitives = frame.len(),
        "built render frame"
    );
    Ok(frame)
}

/// Decade columns with their year labels, plus the top and bottom margin lines.
fn append_grid_primitives(
    frame: &mut RenderFrame,
    scale: RankScale,
    config: &NameSurferConfig,
) -> SurferResult<()> {
    let viewport = frame.viewport;
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    for decade in 0..NDECADES {
        let x = scale.decade_to_pixel(decade, viewport)?;
        frame.push(LinePrimitive::new(
            x,
            0.0,
            x,
            height,
            config.grid_stroke_width,
            config.grid_line_color,
        ));
        frame.push(TextPrimitive::new(
            decade_year(decade).to_string(),
            x,
            height,
            config.decade_label_font_px,
            config.decade_label_color,
            TextVAlign::Bottom,
        ));
    }

    let top = scale.plot_top();
    let bottom = scale.plot_bottom(viewport);
    for y in [top, bottom] {
        frame.push(LinePrimitive::new(
            0.0,
            y,
            width,
            y,
            config.grid_stroke_width,
            config.grid_line_color,
        ));
    }

    Ok(())
}

/// Number of primitives the grid contributes to every frame.
#[must_use]
pub const fn grid_primitive_count() -> usize {
    2 * NDECADES + 2
}
