use crate::core::{BaselineGeometry, GeometryCommand, LogicalScrollOffset, ScaleBounds};
use crate::error::ZoomResult;
use crate::host::ViewHost;
use crate::interaction::{PinchRecognizer, SpanPinchRecognizer};

use super::scale_validation::resolve_initial_scale_state;
use super::{ScaleTextViewConfig, view_core::ViewCore};

/// Pinch-zoomable, single-finger scrollable text surface.
///
/// `ScaleTextView` routes touch batches, drives the zoom state from the
/// recognizer's callbacks and pushes resulting geometry to the host.
pub struct ScaleTextView<H: ViewHost, P: PinchRecognizer = SpanPinchRecognizer> {
    pub(super) core: ViewCore<H>,
    pub(super) recognizer: P,
}

impl<H: ViewHost> ScaleTextView<H, SpanPinchRecognizer> {
    /// Creates a view driven by the default span-based recognizer.
    pub fn with_host(host: H, config: ScaleTextViewConfig) -> ZoomResult<Self> {
        let recognizer = SpanPinchRecognizer::new(config.pinch);
        Self::new(host, recognizer, config)
    }
}

impl<H: ViewHost, P: PinchRecognizer> ScaleTextView<H, P> {
    pub fn new(mut host: H, recognizer: P, config: ScaleTextViewConfig) -> ZoomResult<Self> {
        let scale = resolve_initial_scale_state(&config)?;
        if !config.text.is_empty() {
            host.set_text(&config.text);
        }
        Ok(Self {
            core: ViewCore::new(host, scale),
            recognizer,
        })
    }

    #[must_use]
    pub fn current_scale(&self) -> f64 {
        self.core.scale.current()
    }

    #[must_use]
    pub fn scale_bounds(&self) -> ScaleBounds {
        self.core.scale.bounds()
    }

    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.core.scale.bounds().min()
    }

    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.core.scale.bounds().max()
    }

    #[must_use]
    pub fn baseline(&self) -> Option<BaselineGeometry> {
        self.core.scale.baseline()
    }

    #[must_use]
    pub fn saved_scroll_offset(&self) -> Option<LogicalScrollOffset> {
        self.core.scale.saved_scroll()
    }

    #[must_use]
    pub fn last_geometry_command(&self) -> Option<GeometryCommand> {
        self.core.last_command
    }

    #[must_use]
    pub fn is_gesture_in_progress(&self) -> bool {
        self.core.gesture_in_progress
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.core.host.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.core.host.set_text(text);
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.core.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.core.host
    }

    #[must_use]
    pub fn recognizer(&self) -> &P {
        &self.recognizer
    }

    pub fn recognizer_mut(&mut self) -> &mut P {
        &mut self.recognizer
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.core.host
    }
}
