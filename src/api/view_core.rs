use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::core::{BaselineGeometry, BaselineStatus, GeometryCommand, ScaleState};
use crate::extensions::{ZoomContext, ZoomEvent, ZoomObserver};
use crate::host::ViewHost;
use crate::interaction::ScaleGestureListener;

/// Internal state behind the public facade (`ScaleTextView`).
///
/// Kept apart from the recognizer so the recognizer can borrow it as the
/// gesture listener while it is being fed.
pub(super) struct ViewCore<H: ViewHost> {
    pub(super) host: H,
    pub(super) scale: ScaleState,
    pub(super) observers: IndexMap<String, Box<dyn ZoomObserver>>,
    pub(super) last_command: Option<GeometryCommand>,
    pub(super) gesture_in_progress: bool,
}

impl<H: ViewHost> ViewCore<H> {
    pub(super) fn new(host: H, scale: ScaleState) -> Self {
        Self {
            host,
            scale,
            observers: IndexMap::new(),
            last_command: None,
            gesture_in_progress: false,
        }
    }

    pub(super) fn context(&self) -> ZoomContext {
        ZoomContext {
            current_scale: self.scale.current(),
            bounds: self.scale.bounds(),
            baseline_captured: self.scale.baseline().is_some(),
            gesture_in_progress: self.gesture_in_progress,
        }
    }

    pub(super) fn emit(&mut self, event: ZoomEvent) {
        let context = self.context();
        for observer in self.observers.values_mut() {
            observer.on_event(event, context);
        }
    }

    /// Pushes geometry for the current scale to the host, if a baseline exists.
    pub(super) fn apply_current_geometry(&mut self) {
        let Some(command) = self.scale.geometry_command() else {
            return;
        };
        if let Err(err) = self.host.apply_geometry(&command) {
            warn!(error = %err, scale = command.content_scale, "view host rejected geometry command");
            return;
        }
        trace!(
            scale = command.content_scale,
            container_right = command.container_right,
            scroll_x = command.scroll_x,
            scroll_y = command.scroll_y,
            "geometry applied"
        );
        self.last_command = Some(command);
        self.emit(ZoomEvent::GeometryApplied { command });
    }

    fn ensure_baseline(&mut self) {
        let host = &self.host;
        let status = self.scale.ensure_baseline(|| {
            BaselineGeometry::capture(host.container_geometry(), host.content_geometry())
        });
        match (status, self.scale.baseline()) {
            (BaselineStatus::Captured, Some(baseline)) => {
                debug!(
                    container_width = baseline.container_width,
                    content_width = baseline.content_width,
                    content_height = baseline.content_height,
                    "baseline geometry captured"
                );
                self.emit(ZoomEvent::BaselineCaptured { baseline });
            }
            (BaselineStatus::Deferred, _) => {
                debug!("view not laid out yet, deferring baseline capture");
                self.emit(ZoomEvent::BaselineDeferred);
            }
            _ => {}
        }
    }
}

impl<H: ViewHost> ScaleGestureListener for ViewCore<H> {
    fn on_gesture_begin(&mut self) -> bool {
        let scroll = self.host.scroll_position();
        let saved_scroll = self.scale.begin_gesture(scroll);
        self.gesture_in_progress = true;
        debug!(
            scroll_x = scroll.x,
            scroll_y = scroll.y,
            scale = self.scale.current(),
            "pinch gesture began"
        );
        self.emit(ZoomEvent::GestureBegan { saved_scroll });
        true
    }

    fn on_gesture_update(&mut self, incremental_scale_factor: f64) -> bool {
        self.ensure_baseline();

        let host = &self.host;
        self.scale.ensure_saved_scroll(|| host.scroll_position());

        let previous = self.scale.current();
        let Some(current) = self.scale.apply_factor(incremental_scale_factor) else {
            warn!(
                factor = incremental_scale_factor,
                "ignoring non-finite pinch scale factor"
            );
            return true;
        };
        if current != previous {
            self.emit(ZoomEvent::ScaleChanged { previous, current });
        }

        self.apply_current_geometry();
        true
    }

    fn on_gesture_end(&mut self) {
        self.gesture_in_progress = false;
        debug!(scale = self.scale.current(), "pinch gesture ended");
        self.emit(ZoomEvent::GestureEnded);
    }
}
