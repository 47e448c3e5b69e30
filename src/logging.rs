use anyhow::Result;
use tracing::level_filters;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// One line per event, so vector prints read like a serial console.
pub(crate) fn stdout_layer<S>()
-> fmt::Layer<S, format::DefaultFields, format::Format<format::Compact>> {
    fmt::layer().compact()
}

/// Install the global subscriber: compact stdout output filtered by
/// `RUST_LOG`, defaulting to `info`.
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filters::LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(stdout_layer().with_filter(env_filter))
        .try_init()?;

    Ok(())
}
