use tracing::trace;

use crate::host::ViewHost;
use crate::interaction::{
    InterceptDecision, PinchRecognizer, TouchEvent, TouchRoute, resolve_intercept,
    resolve_touch_route,
};

use super::ScaleTextView;

impl<H: ViewHost, P: PinchRecognizer> ScaleTextView<H, P> {
    /// Decides whether a batch headed for the nested scroll region is claimed.
    ///
    /// Two-pointer batches are intercepted and never reach the nested region.
    /// Any other batch is also fed to native scroll (its result is ignored)
    /// and then left for the nested region.
    pub fn on_intercept_touch_event(&mut self, event: &TouchEvent) -> InterceptDecision {
        let decision = resolve_intercept(event.pointer_count());
        if !decision.intercepts() {
            let _ = self.core.host.dispatch_native_scroll(event);
        }
        trace!(pointers = event.pointer_count(), ?decision, "intercept decision");
        decision
    }

    /// Handles a batch owned by the view itself.
    ///
    /// Exactly two pointers go to the pinch recognizer; everything else goes
    /// to native scroll. Returns the chosen handler's result.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        let route = resolve_touch_route(event.pointer_count());
        trace!(pointers = event.pointer_count(), ?route, "touch route");
        match route {
            TouchRoute::PinchRecognizer => self.recognizer.on_touch_event(event, &mut self.core),
            TouchRoute::NativeScroll => self.core.host.dispatch_native_scroll(event),
        }
    }
}
