use serde::{Deserialize, Serialize};

use crate::core::decades::NDECADES;
use crate::core::entry::Rank;
use crate::core::types::Viewport;
use crate::error::{SurferError, SurferResult};

/// Pixel arithmetic used when projecting decades and ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordinateMode {
    /// Exact floating-point positions.
    #[default]
    Continuous,
    /// Whole-pixel band width and truncated rank positions.
    PixelSnapped,
}

/// Maps decade indices to x and ranks to y inside a margin band.
///
/// Rank `1` sits near the top margin line and `max_rank` on the bottom margin
/// line. Unranked decades are pinned to the bottom line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankScale {
    max_rank: u32,
    margin_px: f64,
    mode: CoordinateMode,
}

impl RankScale {
    pub fn new(max_rank: u32, margin_px: f64) -> SurferResult<Self> {
        if max_rank == 0 {
            return Err(SurferError::InvalidData(
                "max rank must be > 0".to_owned(),
            ));
        }
        if !margin_px.is_finite() || margin_px < 0.0 {
            return Err(SurferError::InvalidData(
                "graph margin must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            max_rank,
            margin_px,
            mode: CoordinateMode::Continuous,
        })
    }

    #[must_use]
    pub fn with_mode(mut self, mode: CoordinateMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn max_rank(self) -> u32 {
        self.max_rank
    }

    #[must_use]
    pub fn margin_px(self) -> f64 {
        self.margin_px
    }

    #[must_use]
    pub fn mode(self) -> CoordinateMode {
        self.mode
    }

    /// Width of one decade column.
    pub fn band_width(self, viewport: Viewport) -> SurferResult<f64> {
        let viewport = viewport.validate()?;
        let decades = NDECADES as u32;
        Ok(match self.mode {
            CoordinateMode::Continuous => f64::from(viewport.width) / f64::from(decades),
            CoordinateMode::PixelSnapped => f64::from(viewport.width / decades),
        })
    }

    /// Pixels per rank step. Negative when the canvas is shorter than both margins.
    pub fn pixels_per_rank(self, viewport: Viewport) -> SurferResult<f64> {
        let viewport = viewport.validate()?;
        let band = f64::from(viewport.height) - 2.0 * self.margin_px;
        Ok(band / f64::from(self.max_rank))
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.margin_px
    }

    #[must_use]
    pub fn plot_bottom(self, viewport: Viewport) -> f64 {
        self.snap(f64::from(viewport.height) - self.margin_px)
    }

    pub fn decade_to_pixel(self, decade: usize, viewport: Viewport) -> SurferResult<f64> {
        let band = self.band_width(viewport)?;
        Ok(decade as f64 * band)
    }

    /// Ranks are not clamped: values above `max_rank` land below the band and
    /// negative values above it.
    pub fn rank_to_pixel(self, rank: Rank, viewport: Viewport) -> SurferResult<f64> {
        let per_rank = self.pixels_per_rank(viewport)?;
        Ok(match rank {
            Rank::Unranked => self.plot_bottom(viewport),
            Rank::Ranked(value) => self.snap(self.margin_px + f64::from(value) * per_rank),
        })
    }

    fn snap(self, value: f64) -> f64 {
        match self.mode {
            CoordinateMode::Continuous => value,
            CoordinateMode::PixelSnapped => value.trunc(),
        }
    }
}
