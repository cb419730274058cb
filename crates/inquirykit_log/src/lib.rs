//! `inquirykit_log` v1:
//! Structured logging setup shared by the inquirykit binaries.
//!
//! Events go to stderr so that stdout stays free for reports.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output rendering for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumLogFormat {
    /// Human-readable single-line events.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLogOptions {
    /// Output rendering.
    pub format: EnumLogFormat,
    /// Filter directive used when `RUST_LOG` is unset.
    pub default_directive: String,
    /// Include event targets (module paths).
    pub if_show_target: bool,
}

impl Default for SpecLogOptions {
    fn default() -> Self {
        Self {
            format: EnumLogFormat::Pretty,
            default_directive: "info".to_string(),
            if_show_target: false,
        }
    }
}

/// Build the env filter: `RUST_LOG` wins, else `default_directive`.
pub fn derive_env_filter(options: &SpecLogOptions) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.default_directive.as_str()))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed; the existing one
/// is kept.
pub fn init_logging(options: &SpecLogOptions) -> bool {
    let env_filter = derive_env_filter(options);
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match options.format {
        EnumLogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(options.if_show_target),
            )
            .try_init(),
        EnumLogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(options.if_show_target)
                    .with_current_span(true),
            )
            .try_init(),
    };

    result.is_ok()
}
