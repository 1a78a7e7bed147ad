use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands};
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::error::PomoError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Paths::default().config_file,
    };
    let config = Config::load_from_path(&config_path)?;
    let format = cli.output.unwrap_or(config.general.default_output);
    log::debug!("loaded config from {}", config_path.display());

    let output = match cli.command {
        Commands::Start(args) => commands::start(&config, args, format)?,
        Commands::History(args) => commands::history(&config, args, format)?,
        Commands::Report(args) => commands::report(&config, args, format)?,
        Commands::Config(args) => commands::config(&config, &config_path, args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
