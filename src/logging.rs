//! Console logging setup.
//!
//! Library code logs through `tracing` macros; the binary installs a fmt
//! subscriber writing to stderr so result paths on stdout stay clean.
//! Severity shows up as colored WARN / INFO / ERROR prefixes.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `shotdata=debug`.
pub const LOG_ENV: &str = "SHOTDATA_LOG";

/// Filter used when [`LOG_ENV`] is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "shotdata=debug"
    } else {
        "shotdata=info"
    }
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let directive =
        std::env::var(LOG_ENV).unwrap_or_else(|_| default_directive(verbose).to_string());
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .without_time()
        .with_env_filter(EnvFilter::new(directive))
        .try_init();
}
