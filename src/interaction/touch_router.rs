use serde::{Deserialize, Serialize};

/// Pinch routing engages only at exactly this many active pointers.
pub const PINCH_POINTER_COUNT: usize = 2;

/// Pointer mode derived from a single batch; nothing is carried between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerMode {
    Idle,
    SinglePointer,
    MultiPointer,
}

impl PointerMode {
    #[must_use]
    pub fn from_pointer_count(count: usize) -> Self {
        match count {
            0 => Self::Idle,
            1 => Self::SinglePointer,
            _ => Self::MultiPointer,
        }
    }
}

/// Whether a batch headed for the nested scroll region is claimed by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterceptDecision {
    /// Claimed; the nested region never sees it.
    Intercept,
    /// Delivered to the nested region after feeding native scroll.
    PassToChildren,
}

impl InterceptDecision {
    #[must_use]
    pub fn intercepts(self) -> bool {
        matches!(self, Self::Intercept)
    }
}

/// Handler that owns a batch once it reaches the view itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchRoute {
    PinchRecognizer,
    NativeScroll,
}

#[must_use]
pub fn resolve_intercept(pointer_count: usize) -> InterceptDecision {
    if pointer_count == PINCH_POINTER_COUNT {
        InterceptDecision::Intercept
    } else {
        InterceptDecision::PassToChildren
    }
}

#[must_use]
pub fn resolve_touch_route(pointer_count: usize) -> TouchRoute {
    if pointer_count == PINCH_POINTER_COUNT {
        TouchRoute::PinchRecognizer
    } else {
        TouchRoute::NativeScroll
    }
}

#[cfg(test)]
mod tests {
    use super::{
        InterceptDecision, PointerMode, TouchRoute, resolve_intercept, resolve_touch_route,
    };

    #[test]
    fn pointer_mode_follows_count() {
        assert_eq!(PointerMode::from_pointer_count(0), PointerMode::Idle);
        assert_eq!(PointerMode::from_pointer_count(1), PointerMode::SinglePointer);
        assert_eq!(PointerMode::from_pointer_count(2), PointerMode::MultiPointer);
        assert_eq!(PointerMode::from_pointer_count(3), PointerMode::MultiPointer);
    }

    #[test]
    fn only_two_pointers_are_intercepted() {
        assert_eq!(resolve_intercept(1), InterceptDecision::PassToChildren);
        assert_eq!(resolve_intercept(2), InterceptDecision::Intercept);
        assert_eq!(resolve_intercept(3), InterceptDecision::PassToChildren);
    }

    #[test]
    fn only_two_pointers_reach_the_pinch_recognizer() {
        assert_eq!(resolve_touch_route(0), TouchRoute::NativeScroll);
        assert_eq!(resolve_touch_route(1), TouchRoute::NativeScroll);
        assert_eq!(resolve_touch_route(2), TouchRoute::PinchRecognizer);
        assert_eq!(resolve_touch_route(3), TouchRoute::NativeScroll);
    }
}
