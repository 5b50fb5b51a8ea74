mod memory_host;

pub use memory_host::MemoryViewHost;

use crate::core::{ContainerGeometry, ContentGeometry, GeometryCommand, ScrollPosition};
use crate::error::ZoomResult;
use crate::interaction::TouchEvent;

/// Contract implemented by the UI toolkit adapter hosting the view.
///
/// The adapter exposes live layout for reads and applies fully materialized
/// `GeometryCommand`s, so zoom math never touches toolkit types.
pub trait ViewHost {
    /// Live width and right edge of the horizontal container.
    fn container_geometry(&self) -> ContainerGeometry;

    /// Live edges and size of the text content.
    fn content_geometry(&self) -> ContentGeometry;

    /// Live horizontal container scroll and nested vertical scroll.
    fn scroll_position(&self) -> ScrollPosition;

    fn apply_geometry(&mut self, command: &GeometryCommand) -> ZoomResult<()>;

    /// Hands a batch to the toolkit's native single-pointer scroll handling.
    fn dispatch_native_scroll(&mut self, event: &TouchEvent) -> bool;

    fn text(&self) -> &str;

    fn set_text(&mut self, text: &str);
}
