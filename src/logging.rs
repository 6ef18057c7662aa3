//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Alternative to `RUST_LOG` that only affects this app
pub const LOG_ENV: &str = "APOD_GALLERY_LOG";

/// Install the global tracing subscriber, writing to stderr
pub fn initialize_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    let directives = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV))
        .unwrap_or_else(|_| default_directives());

    let stderr_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(directives));

    tracing_subscriber::registry()
        .with(stderr_subscriber)
        .try_init()
}

fn default_directives() -> String {
    format!("{}=info,wgpu=warn,iced_wgpu=warn", env!("CARGO_CRATE_NAME"))
}
