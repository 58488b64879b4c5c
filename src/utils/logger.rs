use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::constants;

/// Log output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text format with timestamp, level, target, and message
    Text,
    /// JSON format with structured fields: timestamp, level, target, message
    Json,
}

impl LogFormat {
    /// Parses a format name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use customer_form::utils::logger::LogFormat;
    ///
    /// assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
    /// assert_eq!(LogFormat::parse("yaml"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "text" => Some(LogFormat::Text),
            _ => None,
        }
    }

    /// Reads `CUSTOMER_FORM_LOG_FORMAT`, falling back to `Text`.
    pub fn from_env_or_default() -> Self {
        std::env::var(constants::ENV_LOG_FORMAT)
            .ok()
            .and_then(|s| Self::parse(&s))
            .unwrap_or(LogFormat::Text)
    }
}

/// Initializes the global tracing subscriber.
///
/// Sets up:
/// - Environment filter from `RUST_LOG` (default `info`)
/// - `fmt` layer in the format chosen by `CUSTOMER_FORM_LOG_FORMAT`
/// - Log-to-tracing bridge so the crate's `log` macros reach the subscriber
///
/// Safe to call more than once: if a global subscriber is already set the
/// call returns `Ok(())`.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_log::LogTracer;
    use tracing_subscriber::fmt;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));

    let (text_layer, json_layer) = match LogFormat::from_env_or_default() {
        LogFormat::Text => (
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            ),
            None,
        ),
        LogFormat::Json => (None, Some(fmt::layer().json().with_target(true))),
    };

    // A second init fails harmlessly
    let _ = LogTracer::init();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer);

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!(
            "Tracing subscriber already initialized or failed to initialize: {:?}",
            e
        );
    }
    Ok(())
}
