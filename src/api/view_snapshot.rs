use serde::{Deserialize, Serialize};

use crate::core::{BaselineGeometry, GeometryCommand, LogicalScrollOffset, ScaleBounds};
use crate::error::{ZoomError, ZoomResult};
use crate::host::ViewHost;
use crate::interaction::PinchRecognizer;

use super::ScaleTextView;

pub const VIEW_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable zoom state used by regression tests and debugging tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTextViewSnapshot {
    pub current_scale: f64,
    pub bounds: ScaleBounds,
    pub baseline: Option<BaselineGeometry>,
    pub saved_scroll: Option<LogicalScrollOffset>,
    pub last_geometry_command: Option<GeometryCommand>,
    pub gesture_in_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTextViewSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ScaleTextViewSnapshot,
}

impl ScaleTextViewSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ZoomResult<String> {
        let payload = ScaleTextViewSnapshotJsonContractV1 {
            schema_version: VIEW_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ZoomError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ZoomResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ScaleTextViewSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ScaleTextViewSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ZoomError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != VIEW_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ZoomError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<H: ViewHost, P: PinchRecognizer> ScaleTextView<H, P> {
    #[must_use]
    pub fn snapshot(&self) -> ScaleTextViewSnapshot {
        ScaleTextViewSnapshot {
            current_scale: self.core.scale.current(),
            bounds: self.core.scale.bounds(),
            baseline: self.core.scale.baseline(),
            saved_scroll: self.core.scale.saved_scroll(),
            last_geometry_command: self.core.last_command,
            gesture_in_progress: self.core.gesture_in_progress,
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ZoomResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
