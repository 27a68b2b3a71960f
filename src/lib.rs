//! namesurfer: name-popularity chart engine.
//!
//! A flat-file database maps names to twelve decade ranks. The engine looks
//! names up case-insensitively, keeps the plotted ones in an ordered model, and
//! turns them into a backend-agnostic frame of lines and labels scaled to the
//! current surface size.

pub mod api;
pub mod core;
pub mod database;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{NameSurferConfig, NameSurferEngine, SubmitOutcome};
pub use database::{EntryLookup, NameDatabase};
pub use error::{SurferError, SurferResult};
