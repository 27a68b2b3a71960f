mod chart_model;
mod engine;
mod engine_config;
mod event_controller;
mod json_contract;
mod line_series_render_frame_builder;
mod render_frame_builder;
mod validation;

pub use chart_model::ChartModel;
pub use engine::NameSurferEngine;
pub use engine_config::{NameSurferConfig, SERIES_PALETTE_LEN};
pub use event_controller::SubmitOutcome;
pub use json_contract::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1,
};
pub use line_series_render_frame_builder::series_primitive_count;
pub use render_frame_builder::{build_render_frame, grid_primitive_count};
