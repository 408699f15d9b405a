use anyhow::Context;
use std::path::PathBuf;
use tessera::domain::config::{ApiConfig, LogFormat};
use tessera::kernel::config::load_config;
use tessera_logger::{Format, Logger, parse_level};
use tessera_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // An explicit path must exist; without one `tessera.*` is optional.
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg: ApiConfig = load_config(path).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg)?;

    Server::builder().config(cfg).build().await?.run().await
}

fn init_logger(cfg: &ApiConfig) -> anyhow::Result<Logger> {
    let logging = &cfg.logging;
    let format = match logging.format {
        LogFormat::Compact => Format::Compact,
        LogFormat::Pretty => Format::Pretty,
        LogFormat::Json => Format::Json,
    };

    let mut builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(parse_level(&logging.level)?).format(format);
    if let Some(filter) = &logging.env_filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &logging.path {
        Some(dir) => builder.path(dir).file_format(format).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
