use bitcfd::{cli, Config, Daemon};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Initialize logging
    init_logging(&args);

    let network = args.network.as_deref().unwrap_or("main");
    info!("bitcfd {} starting on {}", env!("CARGO_PKG_VERSION"), network);

    // Load configuration (use defaults unless config file is provided)
    let mut config = if let Some(network) = &args.network {
        match Config::for_network(network) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                process::exit(2);
            }
        }
    } else if let Some(config_path) = &args.config_path {
        match Config::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                process::exit(2);
            }
        }
    } else {
        Config::default()
    };

    // Apply CLI overrides
    config.apply_cli_overrides(&args);

    // Create and run daemon
    let daemon = match Daemon::new(config) {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to initialize daemon: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = daemon.run().await {
        error!("Daemon error: {}", e);
        process::exit(1);
    }

    info!("bitcfd stopped gracefully");
}

fn init_logging(args: &cli::Args) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt().with_env_filter(filter).with_target(true).init();
}
