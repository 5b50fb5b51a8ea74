use crate::error::ZoomResult;
use crate::host::ViewHost;
use crate::interaction::{
    PinchRecognizer, PinchRecognizerConfig, ScaleGestureListener, SpanPinchRecognizer,
};

use super::ScaleTextView;
use super::scale_validation::validate_pinch_config;

/// Lets hosts with their own gesture detector drive the view directly.
impl<H: ViewHost, P: PinchRecognizer> ScaleGestureListener for ScaleTextView<H, P> {
    fn on_gesture_begin(&mut self) -> bool {
        self.core.on_gesture_begin()
    }

    fn on_gesture_update(&mut self, incremental_scale_factor: f64) -> bool {
        self.core.on_gesture_update(incremental_scale_factor)
    }

    fn on_gesture_end(&mut self) {
        self.core.on_gesture_end();
    }
}

impl<H: ViewHost> ScaleTextView<H, SpanPinchRecognizer> {
    #[must_use]
    pub fn pinch_config(&self) -> PinchRecognizerConfig {
        self.recognizer.config()
    }

    pub fn set_pinch_config(&mut self, config: PinchRecognizerConfig) -> ZoomResult<()> {
        let config = validate_pinch_config(config)?;
        self.recognizer.set_config(config);
        Ok(())
    }
}
