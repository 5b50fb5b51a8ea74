use serde::{Deserialize, Serialize};

use crate::core::geometry::{BaselineGeometry, GeometryCommand, resolve_geometry_command};
use crate::core::types::{LogicalScrollOffset, ScrollPosition};
use crate::error::{ZoomError, ZoomResult};

pub const DEFAULT_MIN_SCALE: f64 = 1.0;
pub const DEFAULT_MAX_SCALE: f64 = 2.0;

/// Validated zoom range, `0 < min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScaleBounds")]
pub struct ScaleBounds {
    min: f64,
    max: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}

impl ScaleBounds {
    pub fn new(min: f64, max: f64) -> ZoomResult<Self> {
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || max <= 0.0 || min > max {
            return Err(ZoomError::InvalidScaleBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Clamps `value` into the range. The lower bound wins when `min == max`.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value <= self.min {
            self.min
        } else if value >= self.max {
            self.max
        } else {
            value
        }
    }
}

#[derive(Deserialize)]
struct RawScaleBounds {
    min: f64,
    max: f64,
}

impl TryFrom<RawScaleBounds> for ScaleBounds {
    type Error = ZoomError;

    fn try_from(raw: RawScaleBounds) -> ZoomResult<Self> {
        Self::new(raw.min, raw.max)
    }
}

/// Outcome of making sure a baseline exists before an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaselineStatus {
    /// Baseline was already present.
    Existing,
    /// Baseline was captured by this call.
    Captured,
    /// Live layout was not ready; capture is retried on the next update.
    Deferred,
}

/// Zoom factor, its bounds, and the one-time baseline snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    current: f64,
    bounds: ScaleBounds,
    baseline: Option<BaselineGeometry>,
    saved_scroll: Option<LogicalScrollOffset>,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::new(ScaleBounds::default())
    }
}

impl ScaleState {
    /// Starts at unit scale, clamped into `bounds`.
    #[must_use]
    pub fn new(bounds: ScaleBounds) -> Self {
        Self {
            current: bounds.clamp(1.0),
            bounds,
            baseline: None,
            saved_scroll: None,
        }
    }

    pub fn with_scale(bounds: ScaleBounds, initial: f64) -> ZoomResult<Self> {
        if !initial.is_finite() || initial <= 0.0 {
            return Err(ZoomError::InvalidData(
                "initial scale must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            current: bounds.clamp(initial),
            ..Self::new(bounds)
        })
    }

    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    #[must_use]
    pub fn baseline(&self) -> Option<BaselineGeometry> {
        self.baseline
    }

    #[must_use]
    pub fn saved_scroll(&self) -> Option<LogicalScrollOffset> {
        self.saved_scroll
    }

    /// Replaces the bounds and pulls the current scale back into range.
    pub fn set_bounds(&mut self, bounds: ScaleBounds) {
        self.bounds = bounds;
        self.current = bounds.clamp(self.current);
    }

    /// Records the pre-gesture scroll position in logical units.
    pub fn begin_gesture(&mut self, scroll: ScrollPosition) -> LogicalScrollOffset {
        let saved = LogicalScrollOffset::from_scroll(scroll, self.current);
        self.saved_scroll = Some(saved);
        saved
    }

    /// Returns the saved scroll offset, capturing it from `scroll` when no
    /// gesture begin was observed.
    pub fn ensure_saved_scroll(
        &mut self,
        scroll: impl FnOnce() -> ScrollPosition,
    ) -> LogicalScrollOffset {
        match self.saved_scroll {
            Some(saved) => saved,
            None => self.begin_gesture(scroll()),
        }
    }

    /// Captures the baseline at most once over the lifetime of this state.
    pub fn ensure_baseline(
        &mut self,
        capture: impl FnOnce() -> Option<BaselineGeometry>,
    ) -> BaselineStatus {
        if self.baseline.is_some() {
            return BaselineStatus::Existing;
        }
        match capture() {
            Some(baseline) => {
                self.baseline = Some(baseline);
                BaselineStatus::Captured
            }
            None => BaselineStatus::Deferred,
        }
    }

    /// Applies one incremental pinch factor additively and clamps.
    ///
    /// `current - (1 - factor)`: a factor of 1.0 is the identity. Returns
    /// `None` without touching state when `factor` is not finite.
    pub fn apply_factor(&mut self, factor: f64) -> Option<f64> {
        if !factor.is_finite() {
            return None;
        }
        let raw = self.current - (1.0 - factor);
        self.current = self.bounds.clamp(raw);
        Some(self.current)
    }

    /// Geometry for the current scale, or `None` while no baseline exists.
    #[must_use]
    pub fn geometry_command(&self) -> Option<GeometryCommand> {
        let baseline = self.baseline?;
        Some(resolve_geometry_command(
            self.current,
            &baseline,
            self.saved_scroll.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{BaselineStatus, ScaleBounds, ScaleState};
    use crate::core::geometry::BaselineGeometry;
    use crate::core::types::{ContainerGeometry, ContentGeometry, ScrollPosition};

    fn bounds() -> ScaleBounds {
        ScaleBounds::new(1.0, 3.0).expect("valid bounds")
    }

    #[test]
    fn bounds_reject_inverted_or_non_positive_ranges() {
        assert!(ScaleBounds::new(3.0, 1.0).is_err());
        assert!(ScaleBounds::new(0.0, 1.0).is_err());
        assert!(ScaleBounds::new(-1.0, 1.0).is_err());
        assert!(ScaleBounds::new(1.0, f64::INFINITY).is_err());
        assert!(ScaleBounds::new(2.0, 2.0).is_ok());
    }

    #[test]
    fn degenerate_range_prefers_lower_bound() {
        let bounds = ScaleBounds::new(2.0, 2.0).expect("valid bounds");
        assert_eq!(bounds.clamp(2.0), 2.0);
        assert_eq!(bounds.clamp(5.0), 2.0);
    }

    #[test]
    fn unit_factor_is_identity() {
        let mut state = ScaleState::with_scale(bounds(), 1.7).expect("state");
        assert_eq!(state.apply_factor(1.0), Some(1.7));
    }

    #[test]
    fn non_finite_factor_leaves_scale_untouched() {
        let mut state = ScaleState::with_scale(bounds(), 2.0).expect("state");
        assert_eq!(state.apply_factor(f64::NAN), None);
        assert_eq!(state.current(), 2.0);
    }

    #[test]
    fn baseline_is_captured_once() {
        let mut state = ScaleState::new(bounds());
        let first = BaselineGeometry::capture(
            ContainerGeometry::new(100, 100),
            ContentGeometry::from_edges(0, 0, 100, 50),
        );
        assert_eq!(state.ensure_baseline(|| first), BaselineStatus::Captured);
        let status = state.ensure_baseline(|| panic!("baseline must not be recaptured"));
        assert_eq!(status, BaselineStatus::Existing);
        assert_eq!(state.baseline(), first);
    }

    #[test]
    fn deferred_baseline_is_retried() {
        let mut state = ScaleState::new(bounds());
        assert_eq!(state.ensure_baseline(|| None), BaselineStatus::Deferred);
        assert!(state.geometry_command().is_none());
    }

    #[test]
    fn begin_gesture_normalizes_scroll_by_current_scale() {
        let mut state = ScaleState::with_scale(bounds(), 2.0).expect("state");
        let saved = state.begin_gesture(ScrollPosition::new(300, 50));
        assert_eq!(saved.x, 150.0);
        assert_eq!(saved.y, 25.0);
        let kept = state.ensure_saved_scroll(|| panic!("saved offset already present"));
        assert_eq!(kept, saved);
    }

    #[test]
    fn narrowing_bounds_clamps_current_scale() {
        let mut state = ScaleState::with_scale(bounds(), 2.5).expect("state");
        state.set_bounds(ScaleBounds::new(1.0, 2.0).expect("valid bounds"));
        assert_eq!(state.current(), 2.0);
    }
}
