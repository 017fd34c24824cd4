use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

// sqlx logs every statement at `info`
const QUIET_DIRECTIVES: &str = "sqlx=warn";

pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{default_level},{QUIET_DIRECTIVES}")))
        .unwrap_or_else(|_| EnvFilter::new(format!("info,{QUIET_DIRECTIVES}")));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
