use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the JSON subscriber for a host process embedding the engine.
///
/// Call once at host startup, before the first `Game::dispatch`. Tests
/// install their own subscriber and must not call this.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,engine=info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
