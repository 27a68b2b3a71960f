use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::database::EntryLookup;
use crate::error::{SurferError, SurferResult};
use crate::render::{RenderFrame, Renderer};

use super::NameSurferEngine;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable summary of what the chart currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub names: Vec<String>,
    pub line_count: usize,
    pub label_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SurferResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SurferError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> SurferResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SurferError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SurferError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl RenderFrame {
    pub fn to_json_pretty(&self) -> SurferResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SurferError::InvalidData(format!("failed to serialize frame json: {e}")))
    }
}

impl<R: Renderer, L: EntryLookup> NameSurferEngine<R, L> {
    pub fn snapshot(&self) -> SurferResult<ChartSnapshot> {
        let frame = self.build_render_frame()?;
        Ok(ChartSnapshot {
            viewport: self.viewport,
            names: self.model.names().map(str::to_owned).collect(),
            line_count: frame.lines().count(),
            label_count: frame.labels().count(),
        })
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> SurferResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
