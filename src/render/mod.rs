mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RenderPrimitive, TextPrimitive, TextVAlign};

use crate::error::SurferResult;

/// Contract implemented by any rendering backend.
///
/// A backend receives the complete frame on every pass and replaces whatever
/// it drew before; there is no incremental patching.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SurferResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
