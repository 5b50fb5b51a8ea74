pub mod geometry;
pub mod rounding;
pub mod scale;
pub mod types;

pub use geometry::{BaselineGeometry, ContentEdges, GeometryCommand, resolve_geometry_command};
pub use rounding::{half_delta, round_half_up};
pub use scale::{BaselineStatus, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ScaleBounds, ScaleState};
pub use types::{ContainerGeometry, ContentGeometry, LogicalScrollOffset, ScrollPosition};
