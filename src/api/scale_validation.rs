use crate::core::{ScaleBounds, ScaleState};
use crate::error::{ZoomError, ZoomResult};
use crate::interaction::PinchRecognizerConfig;

use super::ScaleTextViewConfig;

pub(super) fn validate_pinch_config(
    config: PinchRecognizerConfig,
) -> ZoomResult<PinchRecognizerConfig> {
    if !config.min_span_px.is_finite() || config.min_span_px < 0.0 {
        return Err(ZoomError::InvalidData(
            "pinch min_span_px must be finite and >= 0".to_owned(),
        ));
    }
    Ok(config)
}

/// Validates the whole config and builds the initial scale state.
pub(super) fn resolve_initial_scale_state(config: &ScaleTextViewConfig) -> ZoomResult<ScaleState> {
    let bounds = ScaleBounds::new(config.min_scale, config.max_scale)?;
    validate_pinch_config(config.pinch)?;
    ScaleState::with_scale(bounds, config.initial_scale)
}
