use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::SurferResult;
use crate::render::{LinePrimitive, RenderPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are kept in draw order: later entries paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub primitives: Vec<RenderPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: impl Into<RenderPrimitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(RenderPrimitive::as_line)
    }

    pub fn labels(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(RenderPrimitive::as_label)
    }

    /// Finds the first label with exactly `text`.
    #[must_use]
    pub fn label(&self, text: &str) -> Option<&TextPrimitive> {
        self.labels().find(|label| label.text == text)
    }

    pub fn validate(&self) -> SurferResult<()> {
        self.viewport.validate()?;
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
