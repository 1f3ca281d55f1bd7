//! Structured logging initialization built on tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing from CLI flags.
///
/// `RAGCHECK_LOG` (or the standard `RUST_LOG`) overrides both flags when
/// set, so operators can raise verbosity without changing invocations.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level.to_string(),
        (true, None) => "debug".to_string(),
        (false, None) => "warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("RAGCHECK_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level
            } else {
                format!("ragcheck={level},ragcheck_core={level}")
            })
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;

    Ok(())
}
