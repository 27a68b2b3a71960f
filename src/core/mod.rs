pub mod decades;
pub mod entry;
pub mod line_series;
pub mod scale;
pub mod types;

pub use decades::{DECADE_SPAN_YEARS, MAX_RANK, NDECADES, START_DECADE, decade_year};
pub use entry::{NameEntry, Rank};
pub use line_series::{LineSegment, RankPoint, project_rank_points, project_rank_segments};
pub use scale::{CoordinateMode, RankScale};
pub use types::Viewport;
