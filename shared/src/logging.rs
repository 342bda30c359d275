//! Shared logging utilities for consistent tracing output

use tracing_subscriber::EnvFilter;

/// Initialize the stdout tracing subscriber
///
/// `RUST_LOG` takes precedence when set; otherwise the given level is
/// applied to the workspace crates while the HTTP stack stays at `warn`.
pub fn init_tracing(log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");
    let default_filter = format!(
        "server={base_level},shared={base_level},tower_http=warn,axum=warn,hyper=warn,reqwest=warn"
    );

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .compact()
        .init();
}
