use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::BufWriter;
use std::thread;
use std::time::Duration;
use termkit::{Spinner, SpinnerConfig};

use crate::Context;
use crate::cli::SpinArgs;

pub fn run(ctx: &Context, args: &SpinArgs) -> Result<()> {
    let config = build_config(ctx, args)?;
    let delay = Duration::from_millis(args.delay_ms);

    let spinner = Spinner::new(config);
    spinner.start();
    for step in 1..=args.steps {
        thread::sleep(delay);
        spinner.inc_with_message_fmt(format_args!("Step {step} of {}", args.steps));
        spinner.debug_fmt(format_args!("step {step} took {}ms", args.delay_ms));
    }
    spinner.stop();

    log::info!("Completed {} of {} steps", spinner.completed(), spinner.count());
    Ok(())
}

fn build_config(ctx: &Context, args: &SpinArgs) -> Result<SpinnerConfig> {
    let interval = args
        .interval_ms
        .map_or_else(|| ctx.config.spinner.interval(), Duration::from_millis);

    let mut config = SpinnerConfig::new()
        .with_interval(interval)
        .with_count(args.steps)
        .with_max_message_length(ctx.config.spinner.max_message_length)
        .with_start_message(args.start_message.as_str())
        .with_stop_message(args.stop_message.as_str());

    if ctx.quiet {
        config = config.with_output(std::io::sink());
    }

    if let Some(path) = &args.debug_log {
        let file = File::create(path)
            .with_context(|| format!("Could not create debug log {}", path.display()))?;
        log::debug!("Writing spinner history to {}", path.display());
        config = config.with_debug_output(BufWriter::new(file));
    }

    Ok(config)
}
