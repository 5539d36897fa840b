//! Vanilla option pricer server
//!
//! REST API for pricing European and American equity options.

use clap::Parser;
use pricer_server::config::{build_config, CliArgs as ConfigCliArgs, Environment};
use pricer_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Vanilla option pricer - REST API for analytic, tree and grid pricing
#[derive(Parser, Debug)]
#[command(name = "pricer_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Flat annual risk-free rate served to every engine
    #[arg(long, allow_negative_numbers = true)]
    risk_free_rate: Option<f64>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            risk_free_rate: args.risk_free_rate,
        }
    }
}

fn init_tracing(log_level: &str, environment: Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(!environment.is_production()))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str(), config.environment);

    tracing::info!("Vanilla option pricer server v{}", pricer_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        risk_free_rate = config.risk_free_rate,
        binomial_steps = config.engines.binomial_steps,
        fd_time_steps = config.engines.fd_time_steps,
        fd_space_steps = config.engines.fd_space_steps,
        "Server configuration loaded"
    );

    let server = Server::new(config)?;
    tracing::info!(address = %server.socket_addr()?, "Starting server");

    server.run().await
}
