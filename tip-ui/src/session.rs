//! Line-driven interactive session.
//!
//! Each input line is one event for the controller:
//!
//! | Command            | Event |
//! |--------------------|-------|
//! | `amount <text>`    | bill text changed (text kept verbatim, may be empty) |
//! | `percent <n>`      | slider moved |
//! | `round on\|off`    | round-up switch toggled |
//! | `press`            | calculate button activated |
//! | `show`             | redraw the current screen |
//! | `quit`             | end the session |
//!
//! The screen is redrawn whenever the controller publishes a new view.

use std::str::FromStr;

use thiserror::Error;
use tip_core::CurrencyFormatter;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::controller::InteractionController;
use crate::render::render_screen;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Amount(String),
    Percent(f32),
    RoundUp(bool),
    Press,
    Show,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (expected amount, percent, round, press, show or quit)")]
    Unknown(String),

    #[error("invalid percent '{0}'")]
    InvalidPercent(String),

    #[error("invalid switch value '{0}' (expected on or off)")]
    InvalidSwitch(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim().is_empty() {
            return Err(CommandError::Empty);
        }
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "amount" => Ok(Self::Amount(rest.to_string())),
            "percent" => rest
                .trim()
                .parse()
                .map(Self::Percent)
                .map_err(|_| CommandError::InvalidPercent(rest.trim().to_string())),
            "round" => match rest.trim().to_ascii_lowercase().as_str() {
                "on" | "true" | "yes" => Ok(Self::RoundUp(true)),
                "off" | "false" | "no" => Ok(Self::RoundUp(false)),
                other => Err(CommandError::InvalidSwitch(other.to_string())),
            },
            "press" => Ok(Self::Press),
            "show" => Ok(Self::Show),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Applies one command. Returns `false` when the session should end.
pub fn apply<F: CurrencyFormatter>(
    controller: &InteractionController<F>,
    command: Command,
) -> bool {
    match command {
        Command::Amount(text) => controller.set_bill_input(text),
        Command::Percent(position) => controller.set_tip_percent(position),
        Command::RoundUp(round_up) => controller.set_round_up(round_up),
        // Reset task runs detached; the redraw arrives through the subscription.
        Command::Press => drop(controller.activate()),
        Command::Show => {}
        Command::Quit => return false,
    }
    true
}

/// Runs a session until `quit` or end of input.
///
/// Commands are read from `reader`; screens and command errors are written
/// to `writer`.
pub async fn run_session<F, R, W>(
    controller: &InteractionController<F>,
    reader: R,
    mut writer: W,
) -> anyhow::Result<()>
where
    F: CurrencyFormatter,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut views = controller.subscribe();
    let mut lines = reader.lines();

    let initial = views.borrow_and_update().clone();
    writer.write_all(render_screen(&initial).as_bytes()).await?;
    writer.flush().await?;

    loop {
        // Pending views are drawn before the next line is read, so no change
        // is lost when input ends right after it.
        tokio::select! {
            biased;

            changed = views.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = views.borrow_and_update().clone();
                writer.write_all(render_screen(&view).as_bytes()).await?;
                writer.flush().await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    break;
                };
                match line.parse::<Command>() {
                    Ok(Command::Show) => {
                        let view = controller.snapshot();
                        writer.write_all(render_screen(&view).as_bytes()).await?;
                    }
                    Ok(command) => {
                        if !apply(controller, command) {
                            break;
                        }
                    }
                    Err(CommandError::Empty) => {}
                    Err(error) => {
                        writer.write_all(format!("error: {error}\n").as_bytes()).await?;
                    }
                }
                writer.flush().await?;
            }
        }
    }

    if views.has_changed().unwrap_or(false) {
        let view = views.borrow_and_update().clone();
        writer.write_all(render_screen(&view).as_bytes()).await?;
        writer.flush().await?;
    }

    info!("session ended");
    Ok(())
}
