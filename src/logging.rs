use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_FILE: &str = "solutionist.log";

/// `debug` with `--debug`, otherwise `info`; `RUST_LOG` wins when set.
pub fn default_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }))
}

/// Console output on stdout plus an optional timestamped log file.
pub fn init(debug: bool, log_file: Option<&Path>) -> Result<()> {
    let console = fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(false)
        .with_writer(std::io::stdout);

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(default_filter(debug))
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!(e))
}
