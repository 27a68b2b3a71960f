use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::Viewport;
use crate::database::EntryLookup;
use crate::error::SurferResult;
use crate::render::Renderer;

use super::NameSurferEngine;

/// Result of submitting a name from the host's input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// The name was plotted; the host should clear its input.
    Added { name: String, replaced: bool },
    /// No record matches; the chart is unchanged.
    NotFound,
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

impl<R: Renderer, L: EntryLookup> NameSurferEngine<R, L> {
    /// Looks up `text` and plots the matching entry.
    ///
    /// The text is matched as given: case-insensitively, without trimming.
    pub fn on_submit_name(&mut self, text: &str) -> SurferResult<SubmitOutcome> {
        let Some(entry) = self.lookup.find_entry(text).cloned() else {
            info!(query = text, "name not found");
            return Ok(SubmitOutcome::NotFound);
        };

        let name = entry.name().to_owned();
        let replaced = self.model.add_entry(entry);
        debug!(
            name = name.as_str(),
            replaced,
            series = self.model.len(),
            "added series"
        );
        self.render()?;
        Ok(SubmitOutcome::Added { name, replaced })
    }

    /// Removes every plotted series.
    pub fn on_clear(&mut self) -> SurferResult<()> {
        debug!(series = self.model.len(), "clearing series");
        self.model.clear();
        self.render()
    }

    /// Re-renders for a new surface size.
    ///
    /// Zero-sized surfaces are rejected and leave the previous size in place.
    pub fn on_resize(&mut self, width: u32, height: u32) -> SurferResult<()> {
        let viewport = Viewport::new(width, height).validate()?;
        debug!(width, height, "resized surface");
        self.viewport = viewport;
        self.config.viewport = viewport;
        self.render()
    }
}
