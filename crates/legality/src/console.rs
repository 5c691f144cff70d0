//! Logging initialisation.
//!
//! Installs a `tracing` subscriber that prints pipeline events to stderr.
//! `RUST_LOG` overrides the default filter.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive.
///
/// Targets match by prefix, so this covers every `legality*` crate.
pub const DEFAULT_FILTER: &str = "legality=info";

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging with [`DEFAULT_FILTER`].
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initializes logging with explicit filter directives.
///
/// `RUST_LOG`, when set and valid, still wins. Only the first call of
/// either initializer has effect.
pub fn init_with_filter(directives: &str) {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}

/// Filter directive raising every legality crate to `level`.
///
/// # Examples
///
/// ```
/// assert_eq!(legality::console::filter_for("debug"), "legality=debug");
/// ```
pub fn filter_for(level: &str) -> String {
    format!("legality={}", level)
}
