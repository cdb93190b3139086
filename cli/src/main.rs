mod app;
mod config;
mod data;
mod input;
mod logging;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

use config::{config_path, ensure_dirs, LogLevel, UserConfig};
use data::BatteryData;
use logging::LogMode;

#[derive(Debug, Parser)]
#[command(
    name = "voltlog",
    version,
    about = "Logs battery percentage changes and exports them to CSV"
)]
struct Cli {
    /// Use the simulated sensor even when a battery is present
    #[arg(short, long)]
    simulate: bool,

    /// Sampling interval in milliseconds
    #[arg(short = 'i', long)]
    interval_ms: Option<u64>,

    /// Directory for exported CSV files
    #[arg(short = 'o', long)]
    export_dir: Option<PathBuf>,

    /// Log level override (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a few sensor readings without starting the TUI
    Debug {
        /// Number of readings to take
        #[arg(short = 'n', long, default_value_t = 5)]
        samples: u32,
    },

    /// Show or reset the configuration
    Config {
        /// Print the config file path
        #[arg(long)]
        path: bool,

        /// Reset the config to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = ensure_dirs();

    let cli = Cli::parse();
    let mut config = UserConfig::load();
    let log_level_override = cli.log_level.as_deref().map(LogLevel::from_str);
    config.merge_with_args(cli.simulate, cli.interval_ms, cli.export_dir);

    match cli.command {
        Some(Commands::Debug { samples }) => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            run_debug(&config, samples)
        }
        Some(Commands::Config { path, reset }) => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            run_config(path, reset)
        }
        None => {
            let _guard = logging::init(config.log_level, LogMode::File, log_level_override);
            app::run_tui(config)
        }
    }
}

fn run_debug(config: &UserConfig, samples: u32) -> Result<()> {
    let mut battery = BatteryData::new(config.simulate);
    println!("Sensor: {}", battery.sensor_name());

    for i in 1..=samples {
        match battery.refresh() {
            Ok(level) => println!("[{}] battery: {}%", i, level),
            Err(e) => println!("[{}] read failed: {}", i, e),
        }
        if i < samples {
            std::thread::sleep(Duration::from_millis(config.tick_ms));
        }
    }

    Ok(())
}

fn run_config(path: bool, reset: bool) -> Result<()> {
    if reset {
        UserConfig::default().save()?;
        println!("Config reset to defaults: {}", config_path().display());
        return Ok(());
    }

    if path {
        println!("{}", config_path().display());
        return Ok(());
    }

    let config = UserConfig::load();
    print!("{}", toml::to_string_pretty(&config)?);
    println!("# {}", config_path().display());
    Ok(())
}
