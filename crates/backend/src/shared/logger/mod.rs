use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::shared::config::{self, LoggingConfig};

/// Install the global tracing subscriber
///
/// RUST_LOG wins over the configured filter. Output goes to the console and,
/// when `log_dir` is configured, to `<log_dir>/layout.log` without colours.
/// Calling it again after a subscriber is installed does nothing.
///
/// # Examples
/// ```ignore
/// let config = config::load_config()?;
/// logger::init_tracing(&config.logging)?;
/// ```
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| logging.filter.clone()),
    );

    let file_layer = match &logging.log_dir {
        Some(log_dir) => {
            let log_dir = config::resolve_path(log_dir);
            let log_file = open_log_file(&log_dir)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Arc::new(log_file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .try_init();
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(())
}

fn open_log_file(log_dir: &Path) -> anyhow::Result<std::fs::File> {
    std::fs::create_dir_all(log_dir)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("layout.log"))?;
    Ok(log_file)
}
