use scale_text_view::api::{ScaleTextView, ScaleTextViewConfig};
use scale_text_view::core::{
    BaselineGeometry, ContainerGeometry, ContentGeometry, LogicalScrollOffset,
    resolve_geometry_command,
};
use scale_text_view::host::MemoryViewHost;
use scale_text_view::interaction::ScaleGestureListener;
use proptest::prelude::*;

proptest! {
    #[test]
    fn scale_stays_within_bounds_for_any_factor_sequence(
        min in 0.25f64..2.0,
        span in 0.0f64..4.0,
        factors in prop::collection::vec(-2.0f64..4.0, 1..64)
    ) {
        let max = min + span;
        let host = MemoryViewHost::with_viewport(720, 1280);
        let config = ScaleTextViewConfig::new().with_scale_bounds(min, max);
        let mut view = ScaleTextView::with_host(host, config).expect("view init");

        view.on_gesture_begin();
        for factor in factors {
            prop_assert!(view.on_gesture_update(factor));
            let scale = view.current_scale();
            prop_assert!(scale >= min && scale <= max);
        }
    }

    #[test]
    fn baseline_never_changes_after_capture(
        width in 1i32..4_000,
        height in 1i32..8_000,
        factors in prop::collection::vec(0.5f64..1.5, 1..32)
    ) {
        let host = MemoryViewHost::with_viewport(width, height);
        let config = ScaleTextViewConfig::new().with_scale_bounds(0.5, 4.0);
        let mut view = ScaleTextView::with_host(host, config).expect("view init");

        view.on_gesture_begin();
        view.on_gesture_update(1.0);
        let baseline = view.baseline().expect("baseline captured");
        for factor in factors {
            view.on_gesture_update(factor);
            prop_assert_eq!(view.baseline(), Some(baseline));
        }
    }

    #[test]
    fn geometry_resolution_is_pure(
        width in 1i32..4_000,
        height in 1i32..8_000,
        left in -500i32..500,
        scale in 0.1f64..8.0,
        scroll_x in 0.0f64..5_000.0,
        scroll_y in 0.0f64..5_000.0
    ) {
        let baseline = BaselineGeometry::capture(
            ContainerGeometry::new(width, width),
            ContentGeometry::from_edges(left, 0, left + width, height),
        )
        .expect("laid out");
        let saved = LogicalScrollOffset { x: scroll_x, y: scroll_y };

        let first = resolve_geometry_command(scale, &baseline, saved);
        let second = resolve_geometry_command(scale, &baseline, saved);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.content_edges.right - first.content_edges.left,
            baseline.content_width + (first.container_right - baseline.container_right));
    }
}
