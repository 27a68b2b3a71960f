use crate::core::{NameEntry, Rank, RankScale, Viewport};
use crate::error::SurferResult;
use serde::{Deserialize, Serialize};

/// One decade of a name projected into pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankPoint {
    pub decade: usize,
    pub rank: Rank,
    pub x: f64,
    pub y: f64,
}

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects every stored decade of `entry`, unranked ones included.
pub fn project_rank_points(
    entry: &NameEntry,
    scale: RankScale,
    viewport: Viewport,
) -> SurferResult<Vec<RankPoint>> {
    let mut points = Vec::with_capacity(entry.raw_ranks().len());
    for (decade, rank) in entry.ranks().enumerate() {
        points.push(RankPoint {
            decade,
            rank,
            x: scale.decade_to_pixel(decade, viewport)?,
            y: scale.rank_to_pixel(rank, viewport)?,
        });
    }
    Ok(points)
}

/// Joins adjacent points. Nothing extends past the last point.
#[must_use]
pub fn project_rank_segments(points: &[RankPoint]) -> Vec<LineSegment> {
    points
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect()
}
