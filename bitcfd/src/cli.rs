use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bitcfd")]
#[command(about = "bitcf node daemon", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long)]
    pub config_path: Option<PathBuf>,

    /// Network (main, test, regtest)
    #[arg(short, long)]
    pub network: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

pub fn parse_args() -> Args {
    Args::parse()
}
