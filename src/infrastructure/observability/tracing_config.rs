/// How the tracing subscriber should be set up. Filled in from the
/// application settings at startup; this module does not read the
/// environment itself.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}
