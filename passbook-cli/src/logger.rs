//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `--verbose` picks debug level.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "passbook_core=debug,passbook_cli=debug"
    } else {
        "passbook_core=info,passbook_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
