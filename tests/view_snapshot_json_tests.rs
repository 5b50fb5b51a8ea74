use scale_text_view::api::{
    ScaleTextView, ScaleTextViewConfig, ScaleTextViewSnapshot, VIEW_SNAPSHOT_JSON_SCHEMA_V1,
};
use scale_text_view::host::MemoryViewHost;
use scale_text_view::interaction::ScaleGestureListener;

fn zoomed_view() -> ScaleTextView<MemoryViewHost> {
    let host = MemoryViewHost::with_viewport(1080, 600);
    let mut view = ScaleTextView::with_host(host, ScaleTextViewConfig::new()).expect("view init");
    view.host_mut().set_scroll(100, 40);
    view.on_gesture_begin();
    view.on_gesture_update(1.5);
    view
}

#[test]
fn snapshot_reflects_zoom_state() {
    let view = zoomed_view();
    let snapshot = view.snapshot();

    assert_eq!(snapshot.current_scale, 1.5);
    assert_eq!(snapshot.bounds, view.scale_bounds());
    assert!(snapshot.baseline.is_some());
    assert!(snapshot.gesture_in_progress);
    let command = snapshot.last_geometry_command.expect("command");
    assert_eq!(command.scroll_x, 150);
}

#[test]
fn snapshot_json_contract_roundtrips() {
    let view = zoomed_view();
    let json = view.snapshot_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {VIEW_SNAPSHOT_JSON_SCHEMA_V1}")));

    let parsed = ScaleTextViewSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, view.snapshot());
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let view = zoomed_view();
    let json = serde_json::to_string(&view.snapshot()).expect("serialize");
    let parsed = ScaleTextViewSnapshot::from_json_compat_str(&json).expect("parse bare");
    assert_eq!(parsed, view.snapshot());
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let view = zoomed_view();
    let json = view
        .snapshot_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 99");
    let err = ScaleTextViewSnapshot::from_json_compat_str(&json).expect_err("must fail");
    assert!(format!("{err}").contains("unsupported snapshot schema version"));
}

#[test]
fn snapshot_with_invalid_bounds_is_rejected() {
    let view = zoomed_view();
    let json = serde_json::to_string(&view.snapshot())
        .expect("serialize")
        .replace("\"max\":2.0", "\"max\":0.5");
    assert!(ScaleTextViewSnapshot::from_json_compat_str(&json).is_err());
}
