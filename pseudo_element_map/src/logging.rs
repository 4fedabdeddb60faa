use anyhow::Context;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Maps `-q` / `-v` counts to the most verbose level that gets logged.
pub fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber: plain text on stderr, so stdout stays free
/// for tools that capture it.
pub fn tracing_init(max_level: LevelFilter) -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(max_level >= LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(max_level)
        .with(fmt_layer)
        .try_init()
        .context("could not install the tracing subscriber")
}
