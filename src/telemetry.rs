//! Opt-in tracing setup for hosts embedding `scale-text-view`.
//!
//! Gesture and geometry logs are emitted under the `scale_text_view` target.
//! Hosts with their own subscriber can ignore this module entirely.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "scale_text_view=info";

/// Installs a compact `tracing` subscriber using [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"scale_text_view=trace"` to see every applied geometry command.
#[must_use]
#[cfg_attr(not(feature = "telemetry"), allow(unused_variables))]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::init_tracing_with_filter;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn disabled_feature_never_installs_a_subscriber() {
        assert!(!init_tracing_with_filter("scale_text_view=trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_install_is_rejected() {
        let _ = init_tracing_with_filter("scale_text_view=trace");
        assert!(!init_tracing_with_filter("scale_text_view=trace"));
    }
}
