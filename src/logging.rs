//! Diagnostic logging.
//!
//! Logs always go to stderr: `generate --stdout` and `providers` print their
//! results on stdout, which must stay clean for piping.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the default filter.
pub const LOG_ENV: &str = "RUST_LOG";

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "ralph_bundle=debug"
    } else {
        "ralph_bundle=info"
    }
}

/// Install the global subscriber. Call once, from `main`.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::new(
        std::env::var(LOG_ENV).unwrap_or_else(|_| default_directive(verbose).into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
