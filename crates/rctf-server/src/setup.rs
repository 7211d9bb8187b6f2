use crate::prelude::*;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup() -> Result<()> {
    // Panic handler
    color_eyre::install()?;

    // Load .env before reading RUST_LOG
    dotenv::dotenv().ok(); // Error if file does not exist: ignore

    // Setup logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::DEBUG.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stdout),
        )
        .init();

    Ok(())
}
