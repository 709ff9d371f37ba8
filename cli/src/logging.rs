use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map the `-v` count to a level: errors only by default, then warn, info,
/// debug, trace.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Logs never go to stdout, which carries
/// command output only.
pub fn init(verbosity: u8) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(level_for(verbosity)))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .init();
}
