use tracing::debug;

use crate::core::Viewport;
use crate::database::{EntryLookup, NameDatabase};
use crate::error::SurferResult;
use crate::render::{RenderFrame, Renderer};

use super::{ChartModel, NameSurferConfig, build_render_frame};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `NameSurferEngine` owns the chart model, resolves submitted names through
/// its lookup, and pushes a freshly built frame to the renderer after every
/// mutation and every resize. All calls run on the host's event thread.
pub struct NameSurferEngine<R: Renderer, L: EntryLookup = NameDatabase> {
    pub(super) renderer: R,
    pub(super) lookup: L,
    pub(super) model: ChartModel,
    pub(super) viewport: Viewport,
    pub(super) config: NameSurferConfig,
}

impl<R: Renderer, L: EntryLookup> NameSurferEngine<R, L> {
    /// Creates an engine with an empty chart. Nothing is rendered yet.
    pub fn new(renderer: R, lookup: L, config: NameSurferConfig) -> SurferResult<Self> {
        let config = config.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "created name surfer engine"
        );
        Ok(Self {
            renderer,
            lookup,
            model: ChartModel::new(),
            viewport: config.viewport,
            config,
        })
    }

    #[must_use]
    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &NameSurferConfig {
        &self.config
    }

    /// Replaces styling and layout settings, keeping the current viewport.
    pub fn set_config(&mut self, config: NameSurferConfig) -> SurferResult<()> {
        let config = NameSurferConfig {
            viewport: self.viewport,
            ..config
        }
        .validate()?;
        self.config = config;
        self.render()
    }

    #[must_use]
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn build_render_frame(&self) -> SurferResult<RenderFrame> {
        build_render_frame(&self.model, self.viewport, &self.config)
    }

    /// Rebuilds the whole frame and hands it to the renderer.
    pub fn render(&mut self) -> SurferResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> SurferResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
