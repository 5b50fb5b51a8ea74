use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::{PinchRecognizer, PointerSample, ScaleGestureListener, TouchAction, TouchEvent};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchRecognizerConfig {
    /// Minimum finger span, in pixels, before a gesture begins.
    #[serde(default)]
    pub min_span_px: f64,
}

impl Default for PinchRecognizerConfig {
    fn default() -> Self {
        Self { min_span_px: 0.0 }
    }
}

/// Default recognizer that derives the scale factor from finger span.
///
/// The span is twice the mean pointer deviation from the focal point, which
/// equals the finger distance for two pointers.
#[derive(Debug, Clone, Default)]
pub struct SpanPinchRecognizer {
    config: PinchRecognizerConfig,
    in_progress: bool,
    previous_span: f64,
}

impl SpanPinchRecognizer {
    #[must_use]
    pub fn new(config: PinchRecognizerConfig) -> Self {
        Self {
            config,
            in_progress: false,
            previous_span: 0.0,
        }
    }

    #[must_use]
    pub fn config(&self) -> PinchRecognizerConfig {
        self.config
    }

    pub fn set_config(&mut self, config: PinchRecognizerConfig) {
        self.config = config;
    }

    fn finish(&mut self, listener: &mut dyn ScaleGestureListener) {
        listener.on_gesture_end();
        self.in_progress = false;
        self.previous_span = 0.0;
    }
}

fn resolve_span(pointers: &[PointerSample]) -> Option<f64> {
    if pointers.len() < 2 {
        return None;
    }
    let count = pointers.len() as f64;
    let focus_x = pointers.iter().map(|p| p.x).sum::<f64>() / count;
    let focus_y = pointers.iter().map(|p| p.y).sum::<f64>() / count;
    let deviation_x = pointers.iter().map(|p| (p.x - focus_x).abs()).sum::<f64>() / count;
    let deviation_y = pointers.iter().map(|p| (p.y - focus_y).abs()).sum::<f64>() / count;
    let span = (deviation_x * 2.0).hypot(deviation_y * 2.0);
    span.is_finite().then_some(span)
}

impl PinchRecognizer for SpanPinchRecognizer {
    fn on_touch_event(
        &mut self,
        event: &TouchEvent,
        listener: &mut dyn ScaleGestureListener,
    ) -> bool {
        let remaining: SmallVec<[PointerSample; 2]> =
            event.remaining_pointers().copied().collect();
        let ending = matches!(event.action, TouchAction::Up | TouchAction::Cancel)
            || remaining.len() < 2;

        if ending {
            if self.in_progress {
                self.finish(listener);
            }
            return true;
        }

        let Some(span) = resolve_span(&remaining) else {
            return true;
        };

        if !self.in_progress {
            if span > 0.0 && span >= self.config.min_span_px {
                self.previous_span = span;
                self.in_progress = listener.on_gesture_begin();
                trace!(span, accepted = self.in_progress, "pinch gesture begin");
            }
            return true;
        }

        match event.action {
            TouchAction::Move if self.previous_span > 0.0 => {
                let factor = span / self.previous_span;
                if listener.on_gesture_update(factor) {
                    self.previous_span = span;
                }
            }
            TouchAction::PointerDown => {
                self.previous_span = span;
            }
            _ => {}
        }
        true
    }

    fn is_in_progress(&self) -> bool {
        self.in_progress
    }
}

#[cfg(test)]
mod tests {
    use super::{PinchRecognizerConfig, SpanPinchRecognizer};
    use crate::interaction::{PinchRecognizer, ScaleGestureListener, TouchAction, TouchEvent};

    #[derive(Default)]
    struct Recorder {
        begins: usize,
        updates: Vec<f64>,
        ends: usize,
    }

    impl ScaleGestureListener for Recorder {
        fn on_gesture_begin(&mut self) -> bool {
            self.begins += 1;
            true
        }

        fn on_gesture_update(&mut self, incremental_scale_factor: f64) -> bool {
            self.updates.push(incremental_scale_factor);
            true
        }

        fn on_gesture_end(&mut self) {
            self.ends += 1;
        }
    }

    #[test]
    fn factors_are_incremental_between_frames() {
        let mut recognizer = SpanPinchRecognizer::default();
        let mut recorder = Recorder::default();

        let events = [
            TouchEvent::pair(TouchAction::PointerDown, (0.0, 0.0), (100.0, 0.0)),
            TouchEvent::pair(TouchAction::Move, (0.0, 0.0), (150.0, 0.0)),
            TouchEvent::pair(TouchAction::Move, (0.0, 0.0), (300.0, 0.0)),
            TouchEvent::pair(TouchAction::PointerUp, (0.0, 0.0), (300.0, 0.0)).with_action_index(1),
        ];
        for event in &events {
            assert!(recognizer.on_touch_event(event, &mut recorder));
        }

        assert_eq!(recorder.begins, 1);
        assert_eq!(recorder.updates, vec![1.5, 2.0]);
        assert_eq!(recorder.ends, 1);
        assert!(!recognizer.is_in_progress());
    }

    #[test]
    fn min_span_delays_gesture_begin() {
        let mut recognizer = SpanPinchRecognizer::new(PinchRecognizerConfig { min_span_px: 50.0 });
        let mut recorder = Recorder::default();

        recognizer.on_touch_event(
            &TouchEvent::pair(TouchAction::PointerDown, (0.0, 0.0), (24.0, 32.0)),
            &mut recorder,
        );
        assert_eq!(recorder.begins, 0);

        recognizer.on_touch_event(
            &TouchEvent::pair(TouchAction::Move, (0.0, 0.0), (60.0, 80.0)),
            &mut recorder,
        );
        assert_eq!(recorder.begins, 1);
        assert!(recorder.updates.is_empty());
        assert!(recognizer.is_in_progress());
    }

    #[test]
    fn cancel_without_begin_emits_nothing() {
        let mut recognizer = SpanPinchRecognizer::default();
        let mut recorder = Recorder::default();
        recognizer.on_touch_event(&TouchEvent::single(TouchAction::Cancel, 1.0, 1.0), &mut recorder);
        assert_eq!(recorder.ends, 0);
    }
}
