use anyhow::Context;
use clap::Parser;
use provider_delegator::cli::Cli;
use provider_delegator::commands::execute_delegate;
use provider_delegator::config::Config;
use provider_delegator::ui::{exit_code, print_result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    init_logging(&cli, &config);

    let result = execute_delegate(&cli, &config)
        .await
        .with_context(|| format!("failed to delegate task to agent '{}'", cli.agent))?;

    print_result(&result, cli.json)?;
    std::process::exit(exit_code(&result));
}

/// RUST_LOG가 있으면 우선, 없으면 --debug 또는 설정의 log_level 사용
fn init_logging(cli: &Cli, config: &Config) {
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
