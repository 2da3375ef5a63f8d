use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tip_core::TipEngine;
use tokio::io::BufReader;
use tracing::{debug, info};

use tip_ui::{AppConfig, InteractionController, LogFocus, logging, render_screen, session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator.
///
/// Prints the tip for a bill once, or with `--interactive` reads input
/// events from stdin and redraws the screen after every change.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Bill amount as typed; text that is not a number counts as zero.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    amount: String,

    /// Tip percentage, 0 to 30 in steps of 5.
    #[arg(long, allow_hyphen_values = true)]
    percent: Option<f32>,

    /// Round the tip up to the next whole currency unit.
    #[arg(long)]
    round_up: bool,

    /// Currency locale (en-US, en-GB, de-DE, fr-FR, ja-JP).
    #[arg(long)]
    locale: Option<String>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from stdin instead of printing once.
    #[arg(short, long)]
    interactive: bool,

    /// Log filter, e.g. `debug` or `info,tip_ui=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    debug!(?config, "configuration");

    let locale = cli.locale.as_deref().unwrap_or(&config.locale);
    let format = config
        .resolve_currency(cli.locale.as_deref())
        .with_context(|| format!("cannot format currency for locale '{locale}'"))?;

    let controller = InteractionController::new(TipEngine::new(format), Arc::new(LogFocus))
        .with_reset_delay(config.press_reset_delay());
    controller.set_tip_percent(cli.percent.unwrap_or(config.default_tip_percent));
    controller.set_round_up(cli.round_up);
    controller.set_bill_input(cli.amount);

    if cli.interactive {
        logging::set_stdout_enabled(false)?;
        info!(locale, "starting interactive session");
        session::run_session(
            &controller,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
        .await?;
    } else {
        print!("{}", render_screen(&controller.snapshot()));
    }

    Ok(())
}
