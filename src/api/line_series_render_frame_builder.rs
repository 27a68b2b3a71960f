use crate::core::{NameEntry, RankScale, project_rank_points, project_rank_segments};
use crate::error::SurferResult;
use crate::render::{Color, LinePrimitive, RenderFrame, TextPrimitive, TextVAlign};

use super::NameSurferConfig;

/// Appends one name's polyline and per-decade labels.
///
/// Each decade emits the segment to the next decade (if any) followed by the
/// point label, so there are `NDECADES - 1` segments and `NDECADES` labels.
pub(super) fn append_series_primitives(
    frame: &mut RenderFrame,
    entry: &NameEntry,
    color: Color,
    scale: RankScale,
    config: &NameSurferConfig,
) -> SurferResult<()> {
    let points = project_rank_points(entry, scale, frame.viewport)?;
    let mut segments = project_rank_segments(&points).into_iter();

    for point in &points {
        if let Some(segment) = segments.next() {
            frame.push(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                config.series_stroke_width,
                color,
            ));
        }
        frame.push(TextPrimitive::new(
            entry.point_label(point.rank),
            point.x,
            point.y,
            config.name_label_font_px,
            color,
            TextVAlign::Baseline,
        ));
    }

    Ok(())
}

/// Number of primitives one series contributes to a frame.
#[must_use]
pub const fn series_primitive_count() -> usize {
    2 * crate::core::NDECADES - 1
}
