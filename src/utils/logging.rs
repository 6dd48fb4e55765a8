use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Install the global fmt subscriber. Safe to call more than once.
///
/// The filter is read from `RUST_LOG` and falls back to `default_filter`.
pub fn init_logging(default_filter: &str) {
    if INITIALISED.set(()).is_err() {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    if let Err(e) = Registry::default().with(filter).with(fmt_layer).try_init() {
        eprintln!("failed to initialise tracing subscriber: {e}");
    }
}
