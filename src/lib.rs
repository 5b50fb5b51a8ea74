//! scale-text-view: pinch-zoom core for a scrollable text surface.
//!
//! The crate decides per touch batch whether input is a zoom or a scroll,
//! turns pinch deltas into a bounded zoom factor and recomputes container and
//! content geometry so the zoom stays anchored. UI toolkits plug in through
//! `host::ViewHost`.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod host;
pub mod interaction;
pub mod telemetry;

pub use api::{ScaleTextView, ScaleTextViewConfig};
pub use error::{ZoomError, ZoomResult};
