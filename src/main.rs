mod cli;
mod commands;
mod config;
mod kind;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use std::io;
use std::process::ExitCode;

/// Global context for the application
pub struct Context {
    pub verbose: u8,
    pub quiet: bool,
    pub config: config::Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    let config = config::Config::load(cli.config.as_deref())?;
    if cli.no_color || !config.color {
        termkit::color::set_enabled(false);
    }

    let ctx = Context {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config,
    };

    let result = match cli.command {
        Command::Spin(args) => commands::spin::run(&ctx, &args),
        Command::Expand(args) => commands::expand::run(&args),
        Command::Paint(args) => {
            commands::paint::run(&args);
            Ok(())
        }
        Command::Completions { shell } => {
            generate(shell, &mut Cli::command(), "toolbelt", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<errkit::Error>() {
            Some(err) => {
                if ctx.verbose > 0 {
                    termkit::error(&format!("{err:#}"));
                } else {
                    termkit::error(&err.to_string());
                }
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}
