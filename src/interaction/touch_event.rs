use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchAction {
    /// First pointer went down.
    Down,
    /// An additional pointer went down.
    PointerDown,
    Move,
    /// A non-final pointer lifted. The lifting pointer is still in the batch.
    PointerUp,
    /// The last pointer lifted.
    Up,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    #[must_use]
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// One batch of pointer state delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub pointers: SmallVec<[PointerSample; 2]>,
    /// Index into `pointers` of the pointer that changed on
    /// `PointerDown`/`PointerUp`.
    #[serde(default)]
    pub action_index: usize,
}

impl TouchEvent {
    #[must_use]
    pub fn new(action: TouchAction, pointers: impl IntoIterator<Item = PointerSample>) -> Self {
        Self {
            action,
            pointers: pointers.into_iter().collect(),
            action_index: 0,
        }
    }

    #[must_use]
    pub fn single(action: TouchAction, x: f64, y: f64) -> Self {
        Self::new(action, [PointerSample::new(0, x, y)])
    }

    #[must_use]
    pub fn pair(action: TouchAction, first: (f64, f64), second: (f64, f64)) -> Self {
        Self::new(
            action,
            [
                PointerSample::new(0, first.0, first.1),
                PointerSample::new(1, second.0, second.1),
            ],
        )
    }

    #[must_use]
    pub fn with_action_index(mut self, action_index: usize) -> Self {
        self.action_index = action_index;
        self
    }

    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Pointers still touching the surface after this event.
    pub fn remaining_pointers(&self) -> impl Iterator<Item = &PointerSample> {
        let skip = match self.action {
            TouchAction::PointerUp => Some(self.action_index),
            _ => None,
        };
        self.pointers
            .iter()
            .enumerate()
            .filter(move |(index, _)| Some(*index) != skip)
            .map(|(_, pointer)| pointer)
    }
}
