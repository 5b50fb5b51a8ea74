use super::TouchEvent;

/// Receiver of two-finger scale gesture callbacks.
///
/// Callbacks arrive serialized on the event-dispatch thread.
pub trait ScaleGestureListener {
    /// Returns `false` to reject the gesture.
    fn on_gesture_begin(&mut self) -> bool;

    /// `incremental_scale_factor` is relative to the previous frame, not
    /// cumulative. Returns `true` when the update was consumed.
    fn on_gesture_update(&mut self, incremental_scale_factor: f64) -> bool;

    fn on_gesture_end(&mut self);
}

/// Turns raw touch batches into scale gesture callbacks.
pub trait PinchRecognizer {
    /// Feeds one batch. Returns whether the recognizer handled it.
    fn on_touch_event(&mut self, event: &TouchEvent, listener: &mut dyn ScaleGestureListener)
    -> bool;

    fn is_in_progress(&self) -> bool;
}
