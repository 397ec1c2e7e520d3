use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,actix_web=info";

/// Install the global subscriber: `RUST_LOG` filtering and JSON lines on
/// stdout. `LOG_FORMAT=pretty` switches to human-readable output for local runs.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let pretty = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("pretty"));
    let base = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);
    let fmt_layer = if pretty {
        base.compact().boxed()
    } else {
        base.with_ansi(false).json().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
