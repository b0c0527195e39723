use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

// stdout занят выводом команд, логи идут в stderr
pub(crate) fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
