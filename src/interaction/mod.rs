mod gesture;
mod span_pinch_recognizer;
mod touch_event;
mod touch_router;

pub use gesture::{PinchRecognizer, ScaleGestureListener};
pub use span_pinch_recognizer::{PinchRecognizerConfig, SpanPinchRecognizer};
pub use touch_event::{PointerSample, TouchAction, TouchEvent};
pub use touch_router::{
    InterceptDecision, PINCH_POINTER_COUNT, PointerMode, TouchRoute, resolve_intercept,
    resolve_touch_route,
};
