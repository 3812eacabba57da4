//! Todoli - A minimal todo list application skeleton
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use todoli::config;
use todoli_core::prelude::*;

/// Todoli - A minimal todo list application skeleton
#[derive(Parser, Debug)]
#[command(name = "todoli")]
#[command(about = "A minimal todo list application skeleton", long_about = None)]
struct Args {
    /// Use an alternate configuration directory
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write a commented default config.toml and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The guard owns the log sink for the life of the process.
    let _log_guard = match todoli_core::logging::init() {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: {}", err.describe());
            return ExitCode::FAILURE;
        }
    };

    let config_dir = args.config_dir.unwrap_or_else(config::default_config_dir);

    let result = if args.init_config {
        config::init_config_dir(&config_dir).map(|()| {
            println!("Wrote default config to {}", config_dir.display());
        })
    } else {
        let settings = config::load_settings(&config_dir);
        todoli::run(settings)
    };

    // Single catch-point: every failure reaching the user is typed and
    // presentable via describe().
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("fatal: {}", err.describe());
            eprintln!("error: {}", err.describe());
            ExitCode::FAILURE
        }
    }
}
