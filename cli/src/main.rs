mod cli;
mod commands;
mod output;

use clap::Parser;
use meteor::{config, error::Result};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger
    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if args.version {
        println!("meteor {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };

    if !args.no_banner {
        output::banner::print_banner();
    }

    cli::handle_args(args, cfg)
}
