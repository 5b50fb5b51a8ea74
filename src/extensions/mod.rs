//! Extension hooks that sit outside the zoom core.

pub mod observers;

pub use observers::{ZoomContext, ZoomEvent, ZoomObserver};
