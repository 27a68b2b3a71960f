use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::debug;

use crate::core::Viewport;
use crate::error::{SurferError, SurferResult};
use crate::render::{
    Color, LinePrimitive, RenderFrame, RenderPrimitive, Renderer, TextPrimitive, TextVAlign,
};

const LABEL_FONT_FAMILY: &str = "Sans";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> SurferResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`; the
///   surface is recreated whenever a frame arrives with a different viewport
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// A renderer built with `for_external_context` owns no surface and only
/// draws through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: Option<ImageSurface>,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> SurferResult<Self> {
        Ok(Self {
            surface: Some(create_surface(width, height)?),
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Renderer for hosts that hand over their own context on every draw,
    /// such as a GTK `DrawingArea`.
    #[must_use]
    pub fn for_external_context() -> Self {
        Self {
            surface: None,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> SurferResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> SurferResult<()> {
        let surface = self.surface.as_ref().ok_or_else(|| {
            SurferError::InvalidData("renderer has no offscreen surface".to_owned())
        })?;
        surface
            .write_to_png(writer)
            .map_err(|err| SurferError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> SurferResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for primitive in &frame.primitives {
            match primitive {
                RenderPrimitive::Line(line) => {
                    draw_line(context, line)?;
                    stats.lines_drawn += 1;
                }
                RenderPrimitive::Label(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }

    fn offscreen_surface_for(&mut self, viewport: Viewport) -> SurferResult<Option<ImageSurface>> {
        let Some(surface) = &self.surface else {
            return Ok(None);
        };
        let width = i32::try_from(viewport.width).map_err(|_| surface_too_large(viewport))?;
        let height = i32::try_from(viewport.height).map_err(|_| surface_too_large(viewport))?;
        if surface.width() != width || surface.height() != height {
            self.surface = Some(create_surface(width, height)?);
            debug!(width, height, "recreated offscreen cairo surface");
        }
        Ok(self.surface.clone())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SurferResult<()> {
        frame.viewport.validate()?;
        let Some(surface) = self.offscreen_surface_for(frame.viewport)? else {
            // Drawn later on the host context.
            return frame.validate();
        };
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> SurferResult<()> {
        self.render_with_context(context, frame)
    }
}

fn create_surface(width: i32, height: i32) -> SurferResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(SurferError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn surface_too_large(viewport: Viewport) -> SurferError {
    SurferError::InvalidData(format!(
        "viewport {}x{} exceeds the cairo surface limit",
        viewport.width, viewport.height
    ))
}

fn draw_line(context: &Context, line: &LinePrimitive) -> SurferResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::new();
    font_description.set_family(LABEL_FONT_FAMILY);
    font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (_, text_height) = layout.pixel_size();
    // Pango positions layouts by their top-left corner.
    let top = match text.v_align {
        TextVAlign::Baseline => text.y - f64::from(layout.baseline()) / f64::from(pango::SCALE),
        TextVAlign::Bottom => text.y - f64::from(text_height),
    };

    apply_color(context, text.color);
    context.move_to(text.x, top);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> SurferError {
    SurferError::InvalidData(format!("{prefix}: {err}"))
}
