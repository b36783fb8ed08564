//! Tracing setup for the CLI.
//!
//! The subscriber is only installed when `TSESTREE_LOG` (or `RUST_LOG`) is
//! set. Output goes to stderr so it never mixes with the tree on stdout.
//!
//! ```bash
//! TSESTREE_LOG=debug tsestree input.ts > /dev/null
//! ```

use tracing_subscriber::EnvFilter;

const LOG_VAR: &str = "TSESTREE_LOG";

/// Filter from `TSESTREE_LOG`, falling back to `RUST_LOG`. `None` when
/// neither is set.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(directives) = std::env::var(LOG_VAR) {
        return Some(EnvFilter::builder().parse_lossy(directives));
    }
    std::env::var("RUST_LOG")
        .is_ok()
        .then(EnvFilter::from_default_env)
}

pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
