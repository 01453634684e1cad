pub mod cli;
pub mod core;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// 初始化日志，输出到 stderr；`RUST_LOG` 优先
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))?;
    Ok(())
}
