use crate::core::{ContainerGeometry, ContentGeometry, GeometryCommand, ScrollPosition};
use crate::error::{ZoomError, ZoomResult};
use crate::host::ViewHost;
use crate::interaction::TouchEvent;

/// Headless host keeping layout in memory.
///
/// Used by tests and tooling. Applied commands become the new live layout,
/// and every batch handed to native scroll is recorded.
#[derive(Debug, Clone)]
pub struct MemoryViewHost {
    pub container_left: i32,
    pub container_right: i32,
    pub content: ContentGeometry,
    pub content_scale: f64,
    pub content_x: f64,
    pub content_y: f64,
    pub scroll: ScrollPosition,
    pub text: String,
    pub native_scroll_events: Vec<TouchEvent>,
    pub native_scroll_result: bool,
    pub applied_commands: usize,
    apply_failure: Option<String>,
}

impl Default for MemoryViewHost {
    fn default() -> Self {
        Self::new(ContainerGeometry::default(), ContentGeometry::default())
    }
}

impl MemoryViewHost {
    /// Builds a host whose container starts at `right - width`.
    #[must_use]
    pub fn new(container: ContainerGeometry, content: ContentGeometry) -> Self {
        Self {
            container_left: container.right - container.width,
            container_right: container.right,
            content,
            content_scale: 1.0,
            content_x: f64::from(content.left),
            content_y: f64::from(content.top),
            scroll: ScrollPosition::default(),
            text: String::new(),
            native_scroll_events: Vec::new(),
            native_scroll_result: true,
            applied_commands: 0,
            apply_failure: None,
        }
    }

    /// Host for a full-width text surface laid out at the origin.
    #[must_use]
    pub fn with_viewport(width: i32, content_height: i32) -> Self {
        Self::new(
            ContainerGeometry::new(width, width),
            ContentGeometry::from_edges(0, 0, width, content_height),
        )
    }

    pub fn set_scroll(&mut self, x: i32, y: i32) {
        self.scroll = ScrollPosition::new(x, y);
    }

    pub fn set_layout(&mut self, container: ContainerGeometry, content: ContentGeometry) {
        self.container_left = container.right - container.width;
        self.container_right = container.right;
        self.content = content;
    }

    /// Makes the next `apply_geometry` call fail with `reason`.
    pub fn fail_next_apply(&mut self, reason: impl Into<String>) {
        self.apply_failure = Some(reason.into());
    }
}

impl ViewHost for MemoryViewHost {
    fn container_geometry(&self) -> ContainerGeometry {
        ContainerGeometry::new(
            self.container_right.saturating_sub(self.container_left),
            self.container_right,
        )
    }

    fn content_geometry(&self) -> ContentGeometry {
        self.content
    }

    fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    fn apply_geometry(&mut self, command: &GeometryCommand) -> ZoomResult<()> {
        if let Some(reason) = self.apply_failure.take() {
            return Err(ZoomError::Host(reason));
        }
        let edges = command.content_edges;
        self.container_right = command.container_right;
        self.content = ContentGeometry::from_edges(edges.left, edges.top, edges.right, edges.bottom);
        self.content_scale = command.content_scale;
        self.content_x = command.content_x;
        self.content_y = command.content_y;
        self.scroll = ScrollPosition::new(command.scroll_x, command.scroll_y);
        self.applied_commands += 1;
        Ok(())
    }

    fn dispatch_native_scroll(&mut self, event: &TouchEvent) -> bool {
        self.native_scroll_events.push(event.clone());
        self.native_scroll_result
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }
}
