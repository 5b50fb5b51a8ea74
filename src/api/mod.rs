mod gesture_controller;
mod observer_registry;
mod scale_controller;
mod scale_validation;
mod touch_controller;
mod view;
mod view_config;
mod view_core;
mod view_snapshot;

pub use view::ScaleTextView;
pub use view_config::ScaleTextViewConfig;
pub use view_snapshot::{
    ScaleTextViewSnapshot, ScaleTextViewSnapshotJsonContractV1, VIEW_SNAPSHOT_JSON_SCHEMA_V1,
};
