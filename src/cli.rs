use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use termkit::Color;

#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Small utilities for building CLI tools", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "TOOLBELT_NO_COLOR")]
    pub no_color: bool,

    /// Config file (default: <config dir>/toolbelt/config.toml)
    #[arg(long, global = true, env = "TOOLBELT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a spinner through a number of simulated steps
    Spin(SpinArgs),

    /// Expand ${NAME} placeholders using --var values and the environment
    Expand(ExpandArgs),

    /// Print text in a color
    Paint(PaintArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct SpinArgs {
    /// Number of steps to run
    #[arg(short = 'n', long, default_value_t = 5)]
    pub steps: usize,

    /// Time spent on each step, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub delay_ms: u64,

    /// Frame interval in milliseconds (overrides the config file)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Write every shown message to this file
    #[arg(long)]
    pub debug_log: Option<PathBuf>,

    /// Message shown when the spinner starts
    #[arg(long, default_value = "Starting")]
    pub start_message: String,

    /// Message printed when the spinner stops
    #[arg(long, default_value = "Done")]
    pub stop_message: String,
}

#[derive(Args)]
pub struct ExpandArgs {
    /// File to expand (default: stdin)
    pub file: Option<PathBuf>,

    /// Variable override, as NAME=VALUE (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Fail if any placeholder has no value
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct PaintArgs {
    /// Color name: black, red, green, yellow, blue, magenta, cyan or white
    pub color: Color,

    /// Text to print
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing variable name in '{s}'")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_var() {
        assert_eq!(
            parse_var("HOME=/home/foo"),
            Ok(("HOME".to_string(), "/home/foo".to_string()))
        );
        assert_eq!(
            parse_var("EMPTY="),
            Ok(("EMPTY".to_string(), String::new()))
        );
        assert_eq!(
            parse_var("URL=a=b"),
            Ok(("URL".to_string(), "a=b".to_string()))
        );
        assert!(parse_var("=value").is_err());
        assert!(parse_var("novalue").is_err());
    }

    #[test]
    fn test_parse_paint_args() {
        let cli = Cli::try_parse_from(["toolbelt", "paint", "Red", "hello", "world"]).unwrap();
        match cli.command {
            Command::Paint(args) => {
                assert_eq!(args.color, Color::Red);
                assert_eq!(args.text, vec!["hello", "world"]);
            }
            _ => panic!("Expected paint command"),
        }
    }

    #[test]
    fn test_parse_unknown_color() {
        assert!(Cli::try_parse_from(["toolbelt", "paint", "purple", "hi"]).is_err());
    }

    #[test]
    fn test_parse_expand_vars() {
        let cli = Cli::try_parse_from([
            "toolbelt", "expand", "--var", "A=1", "--var", "B=2", "--strict",
        ])
        .unwrap();
        match cli.command {
            Command::Expand(args) => {
                assert!(args.file.is_none());
                assert!(args.strict);
                assert_eq!(args.vars.len(), 2);
            }
            _ => panic!("Expected expand command"),
        }
    }
}
