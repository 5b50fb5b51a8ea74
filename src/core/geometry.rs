use serde::{Deserialize, Serialize};

use crate::core::rounding::{half_delta, round_half_up};
use crate::core::types::{ContainerGeometry, ContentGeometry, LogicalScrollOffset};

/// Reference layout captured once, before any zoom is applied to the view.
///
/// All zoomed geometry is derived from these values, never from the live
/// (already zoomed) layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineGeometry {
    pub container_width: i32,
    pub container_right: i32,
    pub content_left: i32,
    pub content_right: i32,
    pub content_top: i32,
    pub content_bottom: i32,
    pub content_width: i32,
    pub content_height: i32,
}

impl BaselineGeometry {
    /// Captures a baseline from live layout values.
    ///
    /// Returns `None` while the view is not laid out yet (zero container
    /// width or zero content size).
    #[must_use]
    pub fn capture(container: ContainerGeometry, content: ContentGeometry) -> Option<Self> {
        if container.width <= 0 || !content.is_laid_out() {
            return None;
        }
        Some(Self {
            container_width: container.width,
            container_right: container.right,
            content_left: content.left,
            content_right: content.right,
            content_top: content.top,
            content_bottom: content.bottom,
            content_width: content.width,
            content_height: content.height,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEdges {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

/// Fully materialized geometry update for one zoom level.
///
/// Hosts apply it verbatim; no field depends on live layout state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryCommand {
    /// New right edge of the horizontal container. Its left edge is untouched.
    pub container_right: i32,
    /// Uniform scale transform applied to the content (both axes).
    pub content_scale: f64,
    pub content_edges: ContentEdges,
    pub content_x: f64,
    pub content_y: f64,
    /// Horizontal scroll of the outer container.
    pub scroll_x: i32,
    /// Vertical scroll of the nested region.
    pub scroll_y: i32,
}

/// Recomputes container and content geometry for `scale`.
///
/// Pure: identical inputs always produce an identical command.
///
/// Content left/right edges grow by the container's half-delta rather than the
/// content's own; visible zoom anchoring depends on it.
///
/// Edge arithmetic saturates at the `i32` range, so extreme scales pin edges
/// instead of wrapping.
#[must_use]
pub fn resolve_geometry_command(
    scale: f64,
    baseline: &BaselineGeometry,
    saved_scroll: LogicalScrollOffset,
) -> GeometryCommand {
    let after_width = round_half_up(f64::from(baseline.container_width) * scale);
    let diff_width = half_delta(after_width, baseline.container_width);

    let after_width_text = round_half_up(f64::from(baseline.content_width) * scale);
    let after_height_text = round_half_up(f64::from(baseline.content_height) * scale);
    let diff_width_text = half_delta(after_width_text, baseline.content_width);
    let diff_height_text = half_delta(after_height_text, baseline.content_height);

    GeometryCommand {
        container_right: baseline
            .container_right
            .saturating_add(diff_width.saturating_mul(2)),
        content_scale: scale,
        content_edges: ContentEdges {
            left: baseline.content_left.saturating_sub(diff_width),
            right: baseline.content_right.saturating_add(diff_width),
            top: baseline.content_top.saturating_sub(diff_height_text),
            bottom: baseline.content_bottom.saturating_add(diff_height_text),
        },
        content_x: f64::from(baseline.content_left) + f64::from(diff_width_text) * scale,
        content_y: f64::from(baseline.content_top) + f64::from(diff_height_text) * scale,
        scroll_x: round_half_up(saved_scroll.x * scale),
        scroll_y: round_half_up(saved_scroll.y * scale),
    }
}
