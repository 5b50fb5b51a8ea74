use serde::{Deserialize, Serialize};

/// Live horizontal geometry of the outer scroll container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerGeometry {
    pub width: i32,
    pub right: i32,
}

impl ContainerGeometry {
    #[must_use]
    pub fn new(width: i32, right: i32) -> Self {
        Self { width, right }
    }
}

/// Live layout edges of the text content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentGeometry {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
}

impl ContentGeometry {
    /// Builds content geometry from its four edges; width and height follow.
    #[must_use]
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }

    #[must_use]
    pub fn is_laid_out(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Raw scroll position as reported by the host: `x` from the horizontal
/// container, `y` from the nested vertical region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub x: i32,
    pub y: i32,
}

impl ScrollPosition {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Scroll position divided by the zoom factor that was active when it was read.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogicalScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl LogicalScrollOffset {
    /// Normalizes a raw scroll position by `scale`.
    #[must_use]
    pub fn from_scroll(scroll: ScrollPosition, scale: f64) -> Self {
        Self {
            x: f64::from(scroll.x) / scale,
            y: f64::from(scroll.y) / scale,
        }
    }
}
