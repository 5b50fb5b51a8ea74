use serde::{Deserialize, Serialize};

use crate::core::{BaselineGeometry, GeometryCommand, LogicalScrollOffset, ScaleBounds};

/// Read-only state passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomContext {
    pub current_scale: f64,
    pub bounds: ScaleBounds,
    pub baseline_captured: bool,
    pub gesture_in_progress: bool,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoomEvent {
    GestureBegan { saved_scroll: LogicalScrollOffset },
    BaselineCaptured { baseline: BaselineGeometry },
    /// Live layout was not ready; geometry is held back until it is.
    BaselineDeferred,
    ScaleChanged { previous: f64, current: f64 },
    GeometryApplied { command: GeometryCommand },
    GestureEnded,
}

/// Hook interface for host-side reactions to zoom changes.
///
/// Observers see events and context but cannot mutate zoom state.
pub trait ZoomObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ZoomEvent, context: ZoomContext);
}
