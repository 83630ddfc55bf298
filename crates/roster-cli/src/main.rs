//! Roster browser CLI.

use clap::{ColorChoice, Parser};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_cli::settings::Settings;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_browse, run_config, run_list};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings_path = cli.config.clone().unwrap_or_else(Settings::config_path);
    let settings = Settings::load_from(&settings_path);
    let use_color = use_color(cli.color.color);
    let result = match &cli.command {
        Command::Browse(args) => run_browse(&args.data, &settings, use_color),
        Command::List(args) => run_list(args, &settings, use_color),
        Command::Config(args) => run_config(args, &settings, &settings_path),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}
