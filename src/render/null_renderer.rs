use crate::error::SurferResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry without a
/// real backend, and keeps the last frame for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SurferResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_line_count = frame.lines().count();
        self.last_text_count = frame.labels().count();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
