use tracing::debug;

use crate::core::ScaleBounds;
use crate::error::ZoomResult;
use crate::extensions::ZoomEvent;
use crate::host::ViewHost;
use crate::interaction::PinchRecognizer;

use super::ScaleTextView;

impl<H: ViewHost, P: PinchRecognizer> ScaleTextView<H, P> {
    /// Sets the lower zoom bound, keeping the current upper bound.
    pub fn set_min_scale(&mut self, min_scale: f64) -> ZoomResult<()> {
        let max_scale = self.max_scale();
        self.set_scale_bounds(min_scale, max_scale)
    }

    /// Sets the upper zoom bound, keeping the current lower bound.
    pub fn set_max_scale(&mut self, max_scale: f64) -> ZoomResult<()> {
        let min_scale = self.min_scale();
        self.set_scale_bounds(min_scale, max_scale)
    }

    /// Replaces both bounds at once.
    ///
    /// A current scale left outside the new range is clamped and, once a
    /// baseline exists, the clamped geometry is pushed to the host.
    pub fn set_scale_bounds(&mut self, min_scale: f64, max_scale: f64) -> ZoomResult<()> {
        let bounds = ScaleBounds::new(min_scale, max_scale)?;
        let previous = self.core.scale.current();
        self.core.scale.set_bounds(bounds);
        let current = self.core.scale.current();
        debug!(min_scale, max_scale, previous, current, "scale bounds updated");

        if current != previous {
            self.core.emit(ZoomEvent::ScaleChanged { previous, current });
            self.core.apply_current_geometry();
        }
        Ok(())
    }
}
