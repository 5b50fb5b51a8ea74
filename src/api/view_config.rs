use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE};
use crate::interaction::PinchRecognizerConfig;

/// Public view bootstrap configuration.
///
/// Serializable so host applications can persist/load view setup without
/// inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleTextViewConfig {
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
    /// Clamped into `[min_scale, max_scale]` at construction.
    #[serde(default = "default_initial_scale")]
    pub initial_scale: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub pinch: PinchRecognizerConfig,
}

impl Default for ScaleTextViewConfig {
    fn default() -> Self {
        Self {
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            initial_scale: default_initial_scale(),
            text: String::new(),
            pinch: PinchRecognizerConfig::default(),
        }
    }
}

impl ScaleTextViewConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scale_bounds(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    #[must_use]
    pub fn with_initial_scale(mut self, initial_scale: f64) -> Self {
        self.initial_scale = initial_scale;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_pinch_config(mut self, pinch: PinchRecognizerConfig) -> Self {
        self.pinch = pinch;
        self
    }
}

fn default_min_scale() -> f64 {
    DEFAULT_MIN_SCALE
}

fn default_max_scale() -> f64 {
    DEFAULT_MAX_SCALE
}

fn default_initial_scale() -> f64 {
    1.0
}
