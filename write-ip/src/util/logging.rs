use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Diagnostics go to stderr; stdout carries only the confirmation line.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time();

    // A subscriber may already be installed when called from tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
